// Instruction handlers, one module per entry point

pub mod add_plan;
pub mod check_status;
pub mod create_service;
pub mod initialize;
pub mod pause;
pub mod renew;
pub mod subscribe;
pub mod unpause;

pub use add_plan::*;
pub use check_status::*;
pub use create_service::*;
pub use initialize::*;
pub use pause::*;
pub use renew::*;
pub use subscribe::*;
pub use unpause::*;
