// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::fmt;
use std::process::ExitCode;

use lottery_tools::core::artifact::ArtifactError;

pub type MigrateResult = Result<(), MigrateError>;

#[derive(Debug)]
pub struct MigrateError {
    error: eyre::Error,
    exit_code: ExitCode,
}

impl MigrateError {
    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }
}

impl fmt::Display for MigrateError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.error.fmt(f)
    }
}

macro_rules! impl_from_error {
    ($($err:ty),* $(,)?) => {
        $(
            impl From<$err> for MigrateError {
                fn from(err: $err) -> Self {
                    Self {
                        error: err.into(),
                        exit_code: ExitCode::FAILURE,
                    }
                }
            }
        )*
    };
}

impl_from_error!(std::io::Error, lottery_tools::Error, ArtifactError);

impl From<eyre::Error> for MigrateError {
    fn from(error: eyre::Error) -> Self {
        Self {
            error,
            exit_code: ExitCode::FAILURE,
        }
    }
}
