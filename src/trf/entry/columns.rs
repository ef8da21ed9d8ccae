use regex::{Captures, Regex};
use std::num::ParseIntError;
use std::str::FromStr;

use crate::trf::error::{Result, TrfError};
use crate::trf::fields::{optional_float, optional_int, split_ints, split_optional_ints};

/// Named columns of one matched record line. Every accessor reports a
/// failure as a malformed record carrying the whole raw line.
pub(super) struct Columns<'h> {
    record: &'static str,
    data: &'h str,
    caps: Captures<'h>,
}

impl<'h> Columns<'h> {
    pub(super) fn capture(pattern: &Regex, record: &'static str, data: &'h str) -> Result<Self> {
        let caps = pattern
            .captures(data)
            .ok_or_else(|| TrfError::malformed(record, data))?;
        Ok(Self { record, data, caps })
    }

    fn malformed(&self) -> TrfError {
        TrfError::malformed(self.record, self.data)
    }

    pub(super) fn raw(&self, name: &str) -> &'h str {
        self.caps.name(name).map_or("", |m| m.as_str())
    }

    pub(super) fn text(&self, name: &str) -> String {
        self.raw(name).trim().to_string()
    }

    pub(super) fn char(&self, name: &str) -> char {
        self.raw(name).chars().next().unwrap_or(' ')
    }

    pub(super) fn int<T: FromStr>(&self, name: &str) -> Result<T> {
        self.raw(name).trim().parse().map_err(|_| self.malformed())
    }

    pub(super) fn optional_int<T: FromStr<Err = ParseIntError>>(
        &self,
        name: &str,
    ) -> Result<Option<T>> {
        optional_int(self.raw(name)).map_err(|_| self.malformed())
    }

    pub(super) fn float(&self, name: &str) -> Result<f64> {
        self.raw(name).trim().parse().map_err(|_| self.malformed())
    }

    pub(super) fn optional_float(&self, name: &str) -> Result<Option<f64>> {
        optional_float(self.raw(name)).map_err(|_| self.malformed())
    }

    pub(super) fn ints(&self, name: &str, width: usize) -> Result<Vec<u32>> {
        split_ints(self.raw(name), width).map_err(|_| self.malformed())
    }

    pub(super) fn optional_ints(&self, name: &str, width: usize) -> Result<Vec<Option<u32>>> {
        split_optional_ints(self.raw(name), width).map_err(|_| self.malformed())
    }
}
