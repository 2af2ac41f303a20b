use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;
use ulstools::hetu::{age_from_hetu, today};
use ulstools::{Century, Hetu, Sex};

use super::{report_error, Context};
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, DataEvent, StartEvent};

#[derive(Debug, Serialize)]
struct CheckResult<'a> {
    input: &'a str,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

pub fn cmd_hetu_check(codes: &[String], ctx: &Context) -> Result<bool> {
    const COMMAND: &str = "hetu check";

    if ctx.json() {
        emit_event(&StartEvent::new(COMMAND))?;
    }

    let mut all_valid = true;
    for code in codes {
        let result = match Hetu::parse(code) {
            Ok(_) => CheckResult {
                input: code,
                valid: true,
                reason: None,
            },
            Err(reason) => CheckResult {
                input: code,
                valid: false,
                reason: Some(reason.to_string()),
            },
        };
        all_valid &= result.valid;

        if ctx.json() {
            emit_event(&DataEvent::new("hetu", COMMAND, &result))?;
        } else if let Some(reason) = &result.reason {
            println!("{code}  invalid: {reason}");
        } else {
            println!("{code}  valid");
        }
    }

    if ctx.json() {
        emit_event(&CompleteEvent::new(COMMAND, all_valid))?;
    }
    Ok(all_valid)
}

pub fn cmd_hetu_age(code: &str, on: Option<NaiveDate>, ctx: &Context) -> Result<bool> {
    const COMMAND: &str = "hetu age";

    if ctx.json() {
        emit_event(&StartEvent::new(COMMAND))?;
    }

    let success = match age_from_hetu(Some(code), on) {
        Ok(age) => {
            if ctx.json() {
                emit_event(&DataEvent::new(
                    "age",
                    COMMAND,
                    serde_json::json!({ "input": code, "age": age }),
                ))?;
            } else {
                match age {
                    Some(age) => println!("{age}"),
                    None => println!("unknown"),
                }
            }
            true
        }
        Err(err) => {
            report_error(COMMAND, &err.to_string(), ctx)?;
            false
        }
    };

    if ctx.json() {
        emit_event(&CompleteEvent::new(COMMAND, success))?;
    }
    Ok(success)
}

#[derive(Debug, Serialize)]
struct HetuInfo<'a> {
    input: &'a str,
    birth_date: Option<NaiveDate>,
    century: Century,
    individual_number: u16,
    checksum: char,
    sex: Sex,
    age: Option<i32>,
}

impl<'a> HetuInfo<'a> {
    fn new(input: &'a str, hetu: &Hetu, on: NaiveDate) -> Self {
        Self {
            input,
            birth_date: hetu.birth_date(),
            century: hetu.century(),
            individual_number: hetu.individual_number(),
            checksum: hetu.checksum(),
            sex: hetu.sex(),
            age: hetu.age_on(on),
        }
    }
}

pub fn cmd_hetu_info(code: &str, on: Option<NaiveDate>, ctx: &Context) -> Result<bool> {
    const COMMAND: &str = "hetu info";

    if ctx.json() {
        emit_event(&StartEvent::new(COMMAND))?;
    }

    let success = match Hetu::parse(code) {
        Ok(hetu) => {
            let info = HetuInfo::new(code, &hetu, on.unwrap_or_else(today));
            if ctx.json() {
                emit_event(&DataEvent::new("info", COMMAND, &info))?;
            } else {
                print_info(&info);
            }
            true
        }
        Err(reason) => {
            report_error(COMMAND, &format!("invalid hetu '{code}': {reason}"), ctx)?;
            false
        }
    };

    if ctx.json() {
        emit_event(&CompleteEvent::new(COMMAND, success))?;
    }
    Ok(success)
}

fn print_info(info: &HetuInfo<'_>) {
    println!("Hetu:              {}", info.input);
    match info.birth_date {
        Some(date) => println!("Birth date:        {}", date.format("%Y-%m-%d")),
        None => println!("Birth date:        (not a calendar date in this century)"),
    }
    println!("Century:           {}", info.century);
    println!("Individual number: {:03}", info.individual_number);
    println!("Checksum:          {}", info.checksum);
    let sex = match info.sex {
        Sex::Male => "male",
        Sex::Female => "female",
    };
    println!("Sex:               {sex}");
    if let Some(age) = info.age {
        println!("Age:               {age}");
    }
}
