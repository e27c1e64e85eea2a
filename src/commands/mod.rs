mod add_account;
mod list_accounts;
mod show_account;

pub use add_account::add_account;
pub use list_accounts::list_accounts;
pub use show_account::show_account;
