use std::path::Path;

use alloy::{
    dyn_abi::{DynSolValue, FunctionExt, JsonAbiExt},
    json_abi::{Function, JsonAbi},
};
use alloy_primitives::Bytes;

use crate::{
    basic_elements::next_arg::DecodedValues,
    error::{CallError, StartupError},
};

/// Parsed interface of the contract: method name to input/output signature.
#[derive(Debug, Clone, PartialEq)]
pub struct ContractInterface {
    abi: JsonAbi,
}

/// One resolved overload of a contract method.
#[derive(Debug, Clone, Copy)]
pub struct ContractMethod<'a> {
    function: &'a Function,
}

impl ContractInterface {
    pub fn new(abi: JsonAbi) -> Self {
        Self { abi }
    }

    /// Parses a compiled contract artifact and keeps its `"abi"` field.
    pub fn from_artifact(path: &Path, bytes: &[u8]) -> Result<Self, StartupError> {
        let mut artifact: serde_json::Value =
            serde_json::from_slice(bytes).map_err(|source| StartupError::MalformedArtifact {
                path: path.to_path_buf(),
                source,
            })?;

        let abi = artifact
            .get_mut("abi")
            .map(serde_json::Value::take)
            .ok_or_else(|| StartupError::MissingAbi(path.to_path_buf()))?;

        let abi: JsonAbi =
            serde_json::from_value(abi).map_err(|source| StartupError::MalformedArtifact {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self::new(abi))
    }

    pub fn abi(&self) -> &JsonAbi {
        &self.abi
    }

    /// Picks the overload of `name` taking `arity` arguments, or the first
    /// declared overload when none matches (encoding then reports the mismatch).
    pub fn method(&self, name: &str, arity: usize) -> Result<ContractMethod<'_>, CallError> {
        let overloads = self
            .abi
            .function(name)
            .filter(|overloads| !overloads.is_empty())
            .ok_or_else(|| CallError::UnknownMethod(name.to_string()))?;

        let function = overloads
            .iter()
            .find(|function| function.inputs.len() == arity)
            .unwrap_or(&overloads[0]);

        Ok(ContractMethod { function })
    }

    /// Encodes selector and arguments into call data.
    pub fn encode_call(&self, name: &str, args: &[DynSolValue]) -> Result<Bytes, CallError> {
        self.method(name, args.len())?.encode_input(args)
    }

    /// Decodes raw return bytes with the declared outputs of `name`.
    pub fn decode_output(
        &self,
        name: &str,
        arity: usize,
        data: &[u8],
    ) -> Result<DecodedValues, CallError> {
        self.method(name, arity)?.decode_output(data)
    }
}

impl ContractMethod<'_> {
    pub fn name(&self) -> &str {
        &self.function.name
    }

    pub fn signature(&self) -> String {
        self.function.signature()
    }

    pub fn encode_input(&self, args: &[DynSolValue]) -> Result<Bytes, CallError> {
        self.function
            .abi_encode_input(args)
            .map(Bytes::from)
            .map_err(|e| CallError::Encode {
                method: self.function.name.clone(),
                reason: e.to_string(),
            })
    }

    pub fn decode_output(&self, data: &[u8]) -> Result<DecodedValues, CallError> {
        let values = self
            .function
            .abi_decode_output(data)
            .map_err(|e| CallError::Decode {
                method: self.function.name.clone(),
                reason: e.to_string(),
            })?;

        Ok(DecodedValues::new(&self.function.name, values))
    }
}
