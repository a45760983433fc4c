use crate::{BigInt, Error, Result};

impl BigInt {
    /// Division is a declared, permanent gap: this always returns
    /// [`Error::NotImplemented`].
    ///
    /// The method exists so callers reach a typed error through the normal
    /// error path instead of a panic. There is deliberately no `Div` impl.
    pub fn divide(&self, _divisor: &Self) -> Result<BigInt> {
        Err(Error::NotImplemented)
    }
}
