use alloy::dyn_abi::DynSolValue;
use alloy_primitives::{Address, U256};

use crate::error::CallError;

/// Values returned by a contract method, read back in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedValues {
    method: String,
    values: Vec<DynSolValue>,
    offset: usize, // next value to hand out
}

impl DecodedValues {
    pub fn new(method: &str, values: Vec<DynSolValue>) -> Self {
        Self {
            method: method.to_string(),
            values,
            offset: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn next_u256(&mut self) -> Result<U256, CallError> {
        self.next_arg()
    }

    pub fn next_address(&mut self) -> Result<Address, CallError> {
        self.next_arg()
    }

    pub fn next_bool(&mut self) -> Result<bool, CallError> {
        self.next_arg()
    }

    pub fn next_string(&mut self) -> Result<String, CallError> {
        self.next_arg()
    }

    /// Hands out the next value if `extract` accepts it. The offset only
    /// moves on success.
    fn next_typed<T>(
        &mut self,
        expected: &str,
        extract: impl FnOnce(&DynSolValue) -> Option<T>,
    ) -> Result<T, CallError> {
        let value = self.values.get(self.offset).ok_or_else(|| {
            self.unexpected(format!(
                "wanted value #{} but only {} were returned",
                self.offset + 1,
                self.values.len()
            ))
        })?;
        let typed = extract(value).ok_or_else(|| self.mismatch(expected, value))?;
        self.offset += 1;
        Ok(typed)
    }

    fn unexpected(&self, reason: String) -> CallError {
        CallError::UnexpectedOutput {
            method: self.method.clone(),
            reason,
        }
    }

    fn mismatch(&self, expected: &str, got: &DynSolValue) -> CallError {
        let got = got
            .as_type()
            .map(|ty| ty.sol_type_name().into_owned())
            .unwrap_or_else(|| "unknown".to_string());
        self.unexpected(format!("expected {expected}, got {got}"))
    }
}

/// Typed extraction of the next decoded value.
pub trait NextArg<T> {
    fn next_arg(&mut self) -> Result<T, CallError>;
}

impl NextArg<U256> for DecodedValues {
    fn next_arg(&mut self) -> Result<U256, CallError> {
        self.next_typed("uint", |value| value.as_uint().map(|(uint, _bits)| uint))
    }
}

impl NextArg<Address> for DecodedValues {
    fn next_arg(&mut self) -> Result<Address, CallError> {
        self.next_typed("address", DynSolValue::as_address)
    }
}

impl NextArg<bool> for DecodedValues {
    fn next_arg(&mut self) -> Result<bool, CallError> {
        self.next_typed("bool", DynSolValue::as_bool)
    }
}

impl NextArg<String> for DecodedValues {
    fn next_arg(&mut self) -> Result<String, CallError> {
        self.next_typed("string", |value| value.as_str().map(str::to_string))
    }
}
