pub mod alert;
pub mod decision;
pub mod insight;
pub mod location;
pub mod news;
pub mod report;
pub mod signal;
pub mod weather;

pub use alert::*;
pub use decision::*;
pub use insight::*;
pub use location::*;
pub use news::*;
pub use report::*;
pub use signal::*;
pub use weather::*;
