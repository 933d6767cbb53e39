pub mod impl_fake;
pub mod interface;

#[cfg(test)]
mod tests;
