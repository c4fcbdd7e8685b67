//! Path and query-string parsing shared by the handlers.
//!
//! Malformed input is reported as [`ApiError::BadRequest`] so every failure
//! carries the same JSON body.

use std::str::FromStr;

use cellblock_core::Id;
use cellblock_relations::InmateFilter;
use chrono::{NaiveDate, Utc};
use serde::Deserialize;

use crate::error::ApiError;

/// `?date=YYYY-MM-DD`, defaulting to today (UTC).
#[derive(Debug, Default, Deserialize)]
pub struct DateParams {
  pub date: Option<String>,
}

impl DateParams {
  pub fn date_or_today(&self) -> Result<NaiveDate, ApiError> { date_or_today(self.date.as_deref()) }
}

/// `?from=YYYY-MM-DD`, defaulting to today (UTC).
#[derive(Debug, Default, Deserialize)]
pub struct FromParams {
  pub from: Option<String>,
}

impl FromParams {
  pub fn from_or_today(&self) -> Result<NaiveDate, ApiError> { date_or_today(self.from.as_deref()) }
}

/// `?from=YYYY-MM-DD&to=YYYY-MM-DD`, both required.
#[derive(Debug, Default, Deserialize)]
pub struct RangeParams {
  pub from: Option<String>,
  pub to:   Option<String>,
}

impl RangeParams {
  pub fn range(&self) -> Result<(NaiveDate, NaiveDate), ApiError> {
    Ok((required_date("from", self.from.as_deref())?, required_date("to", self.to.as_deref())?))
  }
}

/// `?prisonId=&status=&inmateType=&riskLevel=`, all optional.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
  pub prison_id:   Option<String>,
  pub status:      Option<String>,
  pub inmate_type: Option<String>,
  pub risk_level:  Option<String>,
}

impl SearchParams {
  pub fn filter(&self) -> Result<InmateFilter, ApiError> {
    Ok(InmateFilter {
      prison_id:   self.prison_id.as_deref().map(parse_id).transpose()?,
      status:      parse_choice("status", self.status.as_deref())?,
      inmate_type: parse_choice("inmateType", self.inmate_type.as_deref())?,
      risk_level:  parse_choice("riskLevel", self.risk_level.as_deref())?,
    })
  }
}

pub fn today() -> NaiveDate { Utc::now().date_naive() }

fn parse_date(s: &str) -> Result<NaiveDate, ApiError> {
  NaiveDate::parse_from_str(s, "%Y-%m-%d")
    .map_err(|e| ApiError::BadRequest(format!("invalid date {s:?}: {e}")))
}

fn date_or_today(raw: Option<&str>) -> Result<NaiveDate, ApiError> {
  raw.map_or_else(|| Ok(today()), parse_date)
}

fn required_date(name: &str, raw: Option<&str>) -> Result<NaiveDate, ApiError> {
  match raw {
    Some(s) => parse_date(s),
    None => Err(ApiError::BadRequest(format!("missing {name} date"))),
  }
}

fn parse_choice<T: FromStr>(name: &str, raw: Option<&str>) -> Result<Option<T>, ApiError> {
  raw
    .map(|s| s.parse().map_err(|_| ApiError::BadRequest(format!("invalid {name} {s:?}"))))
    .transpose()
}

pub fn parse_id<R>(raw: &str) -> Result<Id<R>, ApiError> {
  raw
    .parse()
    .map_err(|e: cellblock_core::Error| ApiError::BadRequest(e.to_string()))
}
