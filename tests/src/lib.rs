//! Cross-crate tests for the AFAS entity workspace.

#[cfg(test)]
mod document;
#[cfg(test)]
mod organisation;
