//! Presentation themes.
//!
//! Both themes render the same templates; only the CSS classes differ.

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Classic,
    #[default]
    Gradient,
}

/// Class names the templates pull from.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub page: &'static str,
    pub card: &'static str,
    pub heading: &'static str,
    pub muted: &'static str,
    pub input: &'static str,
    pub input_locked: &'static str,
    pub summary: &'static str,
    pub button: &'static str,
    pub link: &'static str,
    pub table_head: &'static str,
    pub alert: &'static str,
    pub notice: &'static str,
}

impl Theme {
    pub fn palette(self) -> Palette {
        match self {
            Theme::Classic => Palette {
                page: "min-h-screen bg-gray-100 p-6",
                card: "bg-white border border-gray-300 rounded p-6",
                heading: "text-2xl font-semibold text-gray-900 mb-2",
                muted: "text-gray-600",
                input: "w-full border border-gray-400 rounded px-3 py-2",
                input_locked: "w-full border border-gray-300 rounded px-3 py-2 bg-gray-100 text-gray-500",
                summary: "bg-gray-50 border border-gray-200 rounded p-4 grid grid-cols-1 md:grid-cols-3 gap-4",
                button: "bg-gray-800 hover:bg-gray-900 text-white px-4 py-2 rounded",
                link: "text-gray-800 underline",
                table_head: "bg-gray-200",
                alert: "border border-red-400 bg-red-50 text-red-800 rounded p-3 mb-4",
                notice: "border border-yellow-400 bg-yellow-50 text-yellow-800 rounded p-3 mb-4",
            },
            Theme::Gradient => Palette {
                page: "min-h-screen bg-gradient-to-br from-blue-50 to-indigo-50 p-6",
                card: "bg-white shadow rounded-lg p-6",
                heading: "text-2xl font-bold mb-2",
                muted: "text-gray-600",
                input: "w-full border rounded-md px-3 py-2 focus:outline-none focus:ring-2 focus:ring-blue-500",
                input_locked: "w-full border rounded-md px-3 py-2 bg-gray-100 text-gray-500 cursor-not-allowed",
                summary: "bg-gray-50 rounded-md p-4 grid grid-cols-1 md:grid-cols-3 gap-4",
                button: "bg-blue-600 hover:bg-blue-700 text-white px-4 py-2 rounded-md",
                link: "text-blue-600 hover:underline",
                table_head: "bg-gray-100",
                alert: "bg-red-50 text-red-700 rounded-md p-3 mb-4",
                notice: "bg-amber-50 text-amber-800 rounded-md p-3 mb-4",
            },
        }
    }
}
