use alloy::dyn_abi::DynSolValue;
use alloy_primitives::{Address, U256};

/// Ordered call arguments for a contract method.
///
/// Values are not checked here; a mismatch with the method's declared inputs
/// surfaces as an encoding error when the call is built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    values: Vec<DynSolValue>,
}

impl Args {
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    pub fn add_value(mut self, value: DynSolValue) -> Self {
        self.values.push(value);
        self
    }

    pub fn add_address(self, address: Address) -> Self {
        self.add_value(DynSolValue::Address(address))
    }

    pub fn add_u256(self, value: U256) -> Self {
        self.add_value(DynSolValue::Uint(value, 256))
    }

    pub fn add_u64(self, value: u64) -> Self {
        self.add_value(DynSolValue::Uint(U256::from(value), 64))
    }

    pub fn add_bool(self, value: bool) -> Self {
        self.add_value(DynSolValue::Bool(value))
    }

    pub fn add_string(self, value: &str) -> Self {
        self.add_value(DynSolValue::String(value.to_string()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[DynSolValue] {
        &self.values
    }
}
