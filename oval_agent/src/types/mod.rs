pub mod datatype;
pub mod ip_address;
pub mod message;
pub mod operation;
pub mod verdict;

pub use datatype::Datatype;
pub use ip_address::{compare_ipv4, compare_ipv6, parse_ipv4_network, parse_ipv6_network};
pub use message::{Message, MessageLevel};
pub use operation::Operation;
pub use verdict::ResultVerdict;
