pub mod article;
pub mod category;
pub mod state;

pub use article::Article;
pub use category::Category;
pub use state::{ReadingStats, ThemeMode, UserProfile};
