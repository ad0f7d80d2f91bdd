// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Utility functions and types.

use std::collections::BTreeMap;
use std::fmt::Debug;

/// Query parameters keyed by name, each name may carry several values.
///
/// Keys are kept sorted so encoding is deterministic.
pub type QueryValues = BTreeMap<String, Vec<String>>;

/// Encode query values into `application/x-www-form-urlencoded` form.
///
/// ```
/// use jmsapi_core::utils::{encode_query, QueryValues};
///
/// let mut v = QueryValues::new();
/// v.insert("search".to_string(), vec!["bob smith".to_string()]);
/// v.insert("limit".to_string(), vec!["10".to_string()]);
/// assert_eq!(encode_query(&v), "limit=10&search=bob+smith");
/// ```
pub fn encode_query(values: &QueryValues) -> String {
    let mut s = form_urlencoded::Serializer::new(String::new());
    for (k, vs) in values {
        for v in vs {
            s.append_pair(k, v);
        }
    }
    s.finish()
}

/// Parse a raw query string back into query values.
pub fn parse_query(query: &str) -> QueryValues {
    let mut values = QueryValues::new();
    for (k, v) in form_urlencoded::parse(query.as_bytes()) {
        values.entry(k.into_owned()).or_default().push(v.into_owned());
    }
    values
}

/// Redacts a string by replacing all but the first and last three characters with asterisks.
///
/// - If the input string has fewer than 12 characters, it should be entirely redacted.
/// - If the input string has 12 or more characters, only the first three and the last three.
///
/// This design is to allow users to distinguish between different redacted strings but avoid
/// leaking sensitive information.
pub struct Redact<'a>(&'a str);

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact(value)
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact(value.as_str())
    }
}

impl<'a> From<&'a Option<String>> for Redact<'a> {
    fn from(value: &'a Option<String>) -> Self {
        match value {
            None => Redact(""),
            Some(v) => Redact(v),
        }
    }
}

impl Debug for Redact<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let length = self.0.len();
        if length == 0 {
            f.write_str("EMPTY")
        } else if length < 12 {
            f.write_str("***")
        } else {
            f.write_str(&self.0[..3])?;
            f.write_str("***")?;
            f.write_str(&self.0[length - 3..])
        }
    }
}
