pub mod guards;
pub mod validation;

#[cfg(test)]
pub mod test;
