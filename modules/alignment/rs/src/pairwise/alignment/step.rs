use std::borrow::Borrow;
use std::fmt::{Display, Write};

use derive_getters::{Dissolve, Getters};
use eyre::Result;

use bioalgo_core_rs::num::PrimUInt;

use super::op::Op;

/// A run of identical operations in an alignment
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Getters, Dissolve)]
pub struct Step<Len: PrimUInt> {
    /// The length of the run, e.g. the number of consequent matches or gaps.
    /// Guaranteed to be greater than zero.
    len: Len,
    /// The alignment operation
    op: Op,
}

impl<Len: PrimUInt> Step<Len> {
    pub fn new(op: Op, len: Len) -> Result<Self> {
        if len.is_zero() {
            return Err(eyre::eyre!("Step length must be greater than zero"));
        }
        Ok(Self { len, op })
    }

    /// Run-length encodes a stream of single-column operations.
    /// Runs longer than the maximum value of `Len` are split into several steps.
    pub fn from_ops(ops: impl IntoIterator<Item = Op>) -> Vec<Step<Len>> {
        let mut steps: Vec<Step<Len>> = Vec::new();
        for op in ops {
            match steps.last_mut() {
                Some(last) if last.op == op && last.len < Len::max_value() => {
                    last.len = last.len + Len::one();
                }
                _ => steps.push(Step { len: Len::one(), op }),
            }
        }
        steps
    }

    /// Formats steps as `<len><op>` pairs, e.g. `1X2v3=`.
    pub fn rle_string(steps: impl Iterator<Item: Borrow<Step<Len>>>) -> String
    where
        Len: Display,
    {
        let mut result = String::with_capacity(steps.size_hint().0 * 3);
        for step in steps {
            let step = step.borrow();
            // Infallible for String
            let _ = write!(result, "{}{}", step.len, step.op);
        }
        result
    }
}
