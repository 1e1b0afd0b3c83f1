pub mod comment;
pub mod pagination;

// 重新导出常用类型
pub use comment::CommentService;
pub use pagination::{Paginator, DEFAULT_PAGE_SIZE};
