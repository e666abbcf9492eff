// Components module - the pieces of the table screen
//
// - Title bar: source name and row count
// - Header row: column labels with sort glyphs
// - Filter inputs: one per filterable column
// - Table body: the visible page, scrolled when it is taller than the screen
// - Pagination bar, page jump, page-size select: the footer
// - Status bar: focus hint, latest log, theme
// - Toast: transient confirmations
//
// Each component is a focused, single-responsibility module.

pub mod filter_input;
pub mod formatters;
pub mod header_row;
pub mod page_jump;
pub mod page_size_select;
pub mod pagination_bar;
pub mod status_bar;
pub mod table_body;
pub mod title_bar;
pub mod toast;

pub use filter_input::FilterInput;
pub use header_row::HeaderRow;
pub use page_jump::PageJump;
pub use page_size_select::PageSizeSelect;
pub use pagination_bar::PaginationBar;
pub use status_bar::StatusBar;
pub use table_body::TableBody;
pub use title_bar::TitleBar;
pub use toast::Toast;
