mod deposit;
mod summary;
#[cfg(test)]
mod tests;

pub use deposit::PricedDeposit;
pub use summary::CostBasisSummary;
