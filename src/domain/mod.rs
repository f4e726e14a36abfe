pub mod product;
pub mod request;
pub mod waiting_client;
pub mod change;

pub use product::*;
pub use request::*;
pub use waiting_client::*;
pub use change::*;
