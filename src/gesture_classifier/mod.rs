pub mod impl_geometric;
pub mod interface;

#[cfg(test)]
pub mod tests;
