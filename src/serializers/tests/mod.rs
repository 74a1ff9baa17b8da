//! Tests for the row serializers

#[cfg(test)]
mod csv_tests;
#[cfg(test)]
mod dispatcher_tests;
