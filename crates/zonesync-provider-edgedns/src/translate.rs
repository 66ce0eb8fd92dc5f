// # Record Translation
//
// Maps config-dns recordsets to canonical records and back.
//
// ## Wire quirks
//
// - Owner names are fully qualified, without the trailing dot
// - CNAME targets may come back without a trailing dot
// - MX, NAPTR, SRV and SSHFP values are single space-delimited strings
// - NAPTR flags/service/regexp and TXT values are wrapped in double quotes
// - TXT values carry literal `;`, which the canonical form escapes as `\;`
//
// Canonical → wire is the structural inverse. TXT is re-quoted by
// unescaping `\;` and wrapping the value in double quotes, so a wire value
// made of several quoted strings comes back exactly as it was read.

use crate::wire::Recordset;
use zonesync_core::{
    Error, MxValue, NaptrValue, Record, RecordData, RecordType, Result, SrvValue, SshfpValue,
};

/// Provider owner name for a relative canonical name
///
/// The apex (empty name) maps to the zone itself.
pub fn qualify(relative: &str, zone: &str) -> String {
    if relative.is_empty() {
        zone.to_string()
    } else {
        format!("{}.{}", relative, zone)
    }
}

/// Canonical relative name for a provider owner name
///
/// Everything from the first `.{zone}` on is cut off. A name that is the
/// zone itself becomes the apex.
pub fn relativize(name: &str, zone: &str) -> String {
    let name = name.strip_suffix('.').unwrap_or(name);
    let suffix = format!(".{}", zone);
    let relative = match name.find(&suffix) {
        Some(index) => &name[..index],
        None => name,
    };

    if relative == zone {
        String::new()
    } else {
        relative.to_string()
    }
}

/// Translate a recordset into canonical data
pub fn to_record_data(record_type: RecordType, recordset: &Recordset) -> Result<RecordData> {
    let rdata = &recordset.rdata;

    let data = match record_type {
        RecordType::A => RecordData::A(rdata.clone()),
        RecordType::Aaaa => RecordData::Aaaa(rdata.clone()),
        RecordType::Ns => RecordData::Ns(rdata.clone()),
        RecordType::Spf => RecordData::Spf(rdata.clone()),
        RecordType::Cname => {
            let value = first_value(recordset, record_type)?;
            if value.ends_with('.') {
                RecordData::Cname(value.to_string())
            } else {
                RecordData::Cname(format!("{}.", value))
            }
        }
        RecordType::Ptr => RecordData::Ptr(first_value(recordset, record_type)?.to_string()),
        RecordType::Mx => {
            let mut values = Vec::with_capacity(rdata.len());
            for raw in rdata {
                let f = split_fields(recordset, record_type, raw, 2)?;
                values.push(MxValue {
                    preference: f[0].to_string(),
                    exchange: f[1].to_string(),
                });
            }
            RecordData::Mx(values)
        }
        RecordType::Naptr => {
            let mut values = Vec::with_capacity(rdata.len());
            for raw in rdata {
                let f = split_fields(recordset, record_type, raw, 6)?;
                values.push(NaptrValue {
                    order: f[0].to_string(),
                    preference: f[1].to_string(),
                    flags: unquote(recordset, record_type, f[2])?,
                    service: unquote(recordset, record_type, f[3])?,
                    regexp: unquote(recordset, record_type, f[4])?,
                    replacement: f[5].to_string(),
                });
            }
            RecordData::Naptr(values)
        }
        RecordType::Srv => {
            let mut values = Vec::with_capacity(rdata.len());
            for raw in rdata {
                let f = split_fields(recordset, record_type, raw, 4)?;
                values.push(SrvValue {
                    priority: f[0].to_string(),
                    weight: f[1].to_string(),
                    port: f[2].to_string(),
                    target: f[3].to_string(),
                });
            }
            RecordData::Srv(values)
        }
        RecordType::Sshfp => {
            let mut values = Vec::with_capacity(rdata.len());
            for raw in rdata {
                let f = split_fields(recordset, record_type, raw, 3)?;
                values.push(SshfpValue {
                    algorithm: f[0].to_string(),
                    fingerprint_type: f[1].to_string(),
                    fingerprint: f[2].to_string(),
                });
            }
            RecordData::Sshfp(values)
        }
        RecordType::Txt => {
            let mut values = Vec::with_capacity(rdata.len());
            for raw in rdata {
                values.push(unquote(recordset, record_type, raw)?.replace(';', "\\;"));
            }
            RecordData::Txt(values)
        }
    };

    Ok(data)
}

/// Translate a recordset into a canonical record named `name`
pub fn to_record(
    name: impl Into<String>,
    record_type: RecordType,
    recordset: &Recordset,
) -> Result<Record> {
    let data = to_record_data(record_type, recordset)?;
    Ok(Record::new(name, recordset.ttl, data))
}

/// Translate a canonical record into the recordset body for `zone`
pub fn to_recordset(record: &Record, zone: &str) -> Recordset {
    let rdata = match &record.data {
        RecordData::A(values)
        | RecordData::Aaaa(values)
        | RecordData::Ns(values)
        | RecordData::Spf(values) => values.clone(),
        RecordData::Cname(value) | RecordData::Ptr(value) => vec![value.clone()],
        RecordData::Mx(values) => values
            .iter()
            .map(|v| format!("{} {}", v.preference, v.exchange))
            .collect(),
        RecordData::Naptr(values) => values
            .iter()
            .map(|v| {
                format!(
                    "{} {} \"{}\" \"{}\" \"{}\" {}",
                    v.order, v.preference, v.flags, v.service, v.regexp, v.replacement
                )
            })
            .collect(),
        RecordData::Srv(values) => values
            .iter()
            .map(|v| format!("{} {} {} {}", v.priority, v.weight, v.port, v.target))
            .collect(),
        RecordData::Sshfp(values) => values
            .iter()
            .map(|v| format!("{} {} {}", v.algorithm, v.fingerprint_type, v.fingerprint))
            .collect(),
        RecordData::Txt(values) => values
            .iter()
            .map(|v| format!("\"{}\"", v.replace("\\;", ";")))
            .collect(),
    };

    Recordset {
        name: qualify(&record.name, zone),
        record_type: record.record_type().to_string(),
        ttl: record.ttl,
        rdata,
    }
}

fn first_value(recordset: &Recordset, record_type: RecordType) -> Result<&str> {
    recordset
        .rdata
        .first()
        .map(String::as_str)
        .ok_or_else(|| Error::translation(&recordset.name, record_type, "empty rdata"))
}

// Split on the first `count - 1` spaces; the last field keeps any remaining spaces.
fn split_fields<'a>(
    recordset: &Recordset,
    record_type: RecordType,
    raw: &'a str,
    count: usize,
) -> Result<Vec<&'a str>> {
    let fields: Vec<&str> = raw.splitn(count, ' ').collect();
    if fields.len() != count {
        return Err(Error::translation(
            &recordset.name,
            record_type,
            format!("expected {} space-separated fields in '{}'", count, raw),
        ));
    }
    Ok(fields)
}

// Drop the first and last character (the provider's quotes).
fn unquote(recordset: &Recordset, record_type: RecordType, raw: &str) -> Result<String> {
    let mut chars = raw.chars();
    if chars.next().is_none() || chars.next_back().is_none() {
        return Err(Error::translation(
            &recordset.name,
            record_type,
            format!("expected a quoted value, got '{}'", raw),
        ));
    }
    Ok(chars.as_str().to_string())
}
