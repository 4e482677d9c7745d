//! Domain model (states, constraints, estimates, ids, ...).

pub mod constraints;
pub mod estimate;
pub mod header;
pub mod ids;
pub mod parameters;
pub mod state;

pub use self::constraints::Constraints;
pub use self::estimate::Estimate;
pub use self::header::Header;
pub use self::ids::CorrelationToken;
pub use self::parameters::Parameters;
pub use self::state::TaskState;
