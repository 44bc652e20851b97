//! First N records of a JSON file.
//!
//! Handles two layouts: a top-level array, read incrementally so that
//! multi-gigabyte files only ever hold N records in memory, and a
//! top-level object whose records sit under one of a few well-known
//! list keys.
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, Read, Write};
use std::path::Path;

use serde::de::{DeserializeSeed, IgnoredAny, SeqAccess, Visitor};
use serde_json::{Map, Value};

use crate::error::Error;

/// Keys under which record lists are commonly nested.
const RECORD_KEYS: [&str; 4] = ["data", "results", "cases", "documents"];

pub fn sample<W: Write>(src: &Path, count: usize, out: &mut W) -> Result<(), Error> {
    writeln!(out, "{}", "=".repeat(50))?;
    writeln!(out, "file: {:?}", src)?;
    writeln!(out, "sample size: {} records", count)?;
    writeln!(out, "{}", "=".repeat(50))?;

    let handle = File::open(src)?;
    let mut reader = BufReader::new(handle);

    let records = match peek_nonws(&mut reader)? {
        Some(b'[') => {
            writeln!(out, "layout: JSON array")?;
            read_array_head(reader, count)?
        }
        Some(b'{') => {
            writeln!(out, "layout: JSON object")?;
            let object: Map<String, Value> = serde_json::from_reader(reader)?;
            let records = RECORD_KEYS.iter().find_map(|key| match object.get(*key) {
                Some(Value::Array(items)) => Some((*key, items)),
                _ => None,
            });
            match records {
                Some((key, items)) => {
                    writeln!(out, "record key: '{}'", key)?;
                    items.iter().take(count).cloned().collect()
                }
                // no recognized list key, show the object itself
                None => vec![Value::Object(object)],
            }
        }
        _ => {
            return Err(Error::Custom(format!(
                "unrecognized JSON layout in {:?} (expected a top-level array or object)",
                src
            )))
        }
    };

    writeln!(out, "\nsample records:")?;
    for (i, record) in records.iter().enumerate() {
        writeln!(out, "\nrecord #{}:", i + 1)?;
        writeln!(out, "{}", serde_json::to_string_pretty(record)?)?;
    }

    Ok(())
}

/// Returns the first non-whitespace byte without consuming it.
fn peek_nonws<R: BufRead>(reader: &mut R) -> Result<Option<u8>, Error> {
    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            return Ok(None);
        }
        match buf.iter().position(|b| !b.is_ascii_whitespace()) {
            Some(i) => {
                let byte = buf[i];
                reader.consume(i);
                return Ok(Some(byte));
            }
            None => {
                let len = buf.len();
                reader.consume(len);
            }
        }
    }
}

/// Reads the first `count` elements of a top-level JSON array, then
/// drains the remainder without buffering it.
fn read_array_head<R: Read>(reader: R, count: usize) -> Result<Vec<Value>, Error> {
    let mut de = serde_json::Deserializer::from_reader(reader);
    let head = ArrayHead(count).deserialize(&mut de)?;
    de.end()?;
    Ok(head)
}

struct ArrayHead(usize);

impl<'de> DeserializeSeed<'de> for ArrayHead {
    type Value = Vec<Value>;

    fn deserialize<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(self)
    }
}

impl<'de> Visitor<'de> for ArrayHead {
    type Value = Vec<Value>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a JSON array")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut head = Vec::with_capacity(self.0);
        while head.len() < self.0 {
            match seq.next_element::<Value>()? {
                Some(value) => head.push(value),
                None => return Ok(head),
            }
        }

        // the array tail still has to be parsed, but not kept
        while seq.next_element::<IgnoredAny>()?.is_some() {}

        Ok(head)
    }
}
