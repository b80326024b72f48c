//! CLI domain: parse, route, output, and presentation only.
//! No domain orchestration; the route table dispatches to domain services.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{
    format_document_json, format_generate_result_text, format_theme_list,
};
pub use route::RunContext;
