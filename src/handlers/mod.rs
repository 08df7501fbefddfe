pub mod health;
pub mod doc_upload;
pub mod doc_analyze;
pub mod doc_generate;
pub mod doc_list;
pub mod doc_delete;
pub mod fallback;

pub use health::*;
pub use doc_upload::*;
pub use doc_analyze::*;
pub use doc_generate::*;
pub use doc_list::*;
pub use doc_delete::*;
pub use fallback::*;
