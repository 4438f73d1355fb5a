//! Page Components

mod deposit;

pub use deposit::DepositPage;
