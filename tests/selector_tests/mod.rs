//! Selector Test Suite
//!
//! ## Structure
//! - `member_resolution` - Overloads, inherited and default members, failures
//! - `container_resolution` - Container lookup, identity and equality
//! - `factory` - `build`, prefixes, ambiguous names and unique ids
//! - `location` - File, directory, URI and classpath resource selectors
//! - `concurrency` - Memoization under concurrent first access

pub mod test_utils;

pub mod concurrency;
pub mod container_resolution;
pub mod factory;
pub mod location;
