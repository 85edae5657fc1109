use super::super::domain::Lead;
use serde::Deserialize;
use std::io::Read;

#[derive(Deserialize)]
#[serde(untagged)]
enum LeadPayload {
    Many(Vec<Lead>),
    One(Box<Lead>),
}

/// Accepts either a JSON array of leads or a single lead object.
pub(crate) fn parse_leads<R: Read>(reader: R) -> Result<Vec<Lead>, serde_json::Error> {
    let payload: LeadPayload = serde_json::from_reader(reader)?;
    Ok(match payload {
        LeadPayload::Many(leads) => leads,
        LeadPayload::One(lead) => vec![*lead],
    })
}
