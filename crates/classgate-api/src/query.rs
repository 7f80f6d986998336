// Classgate
// Copyright (C) 2025 Classgate Contributors

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.

// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! Typed query-string decoders, one per route
//!
//! Each decoder turns the raw query string into a validated backend request
//! or a `BadRequest` naming the offending parameter. Handlers stay free of
//! ad hoc parsing. An empty-valued parameter counts as missing, and
//! missing-ness is checked before integer parsing.

use crate::error::{ApiError, ApiResult};
use crate::proto::{AddSessionRequest, GetSessionRequest, RegisterTeacherRequest};
use std::collections::HashMap;

/// Decode `?name=` for /registerTeacher
pub fn register_teacher(query: &str) -> ApiResult<RegisterTeacherRequest> {
    let params = parse_query(query);

    let name = require(&params, "name").ok_or_else(|| ApiError::BadRequest {
        message: "Missing 'name' query parameter".to_string(),
    })?;

    Ok(RegisterTeacherRequest { name: name.to_string() })
}

/// Decode `?teacherId=&courseId=&date=` for /addSession
pub fn add_session(query: &str) -> ApiResult<AddSessionRequest> {
    let params = parse_query(query);

    let teacher_id = require(&params, "teacherId");
    let course_id = require(&params, "courseId");
    let date = require(&params, "date");

    let (Some(teacher_id), Some(course_id), Some(date)) = (teacher_id, course_id, date) else {
        return Err(ApiError::BadRequest {
            message: "Missing one or more query parameters".to_string(),
        });
    };

    Ok(AddSessionRequest {
        teacher_id: parse_i32(teacher_id, "teacherId")?,
        course_id: parse_i32(course_id, "courseId")?,
        date: date.to_string(),
    })
}

/// Decode `?id=` for /getSession
pub fn get_session(query: &str) -> ApiResult<GetSessionRequest> {
    let params = parse_query(query);

    let id = require(&params, "id").ok_or_else(|| ApiError::BadRequest {
        message: "Missing 'id' query parameter".to_string(),
    })?;

    Ok(GetSessionRequest { id: parse_i32(id, "id")? })
}

/// First occurrence wins for duplicate keys
fn parse_query(query: &str) -> HashMap<String, String> {
    let mut params = HashMap::new();
    for (key, value) in url::form_urlencoded::parse(query.as_bytes()).into_owned() {
        params.entry(key).or_insert(value);
    }
    params
}

fn require<'a>(params: &'a HashMap<String, String>, name: &str) -> Option<&'a str> {
    params.get(name).map(String::as_str).filter(|v| !v.is_empty())
}

/// Base-10 signed 32-bit, matching the backend's field width
fn parse_i32(value: &str, name: &str) -> ApiResult<i32> {
    value.parse::<i32>().map_err(|_| ApiError::BadRequest {
        message: format!("Invalid '{}' query parameter", name),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_teacher_decodes_name() {
        let req = register_teacher("name=Ada").unwrap();
        assert_eq!(req.name, "Ada");
    }

    #[test]
    fn test_register_teacher_decodes_percent_encoding() {
        let req = register_teacher("name=Ada%20Lovelace").unwrap();
        assert_eq!(req.name, "Ada Lovelace");
    }

    #[test]
    fn test_duplicate_parameters_use_first_value() {
        let req = register_teacher("name=Ada&name=Grace").unwrap();
        assert_eq!(req.name, "Ada");

        let req = get_session("id=7&id=8").unwrap();
        assert_eq!(req.id, 7);
    }

    #[test]
    fn test_register_teacher_missing_name() {
        let err = register_teacher("").unwrap_err();
        assert_eq!(err.to_string(), "Missing 'name' query parameter");

        // An empty value counts as missing
        let err = register_teacher("name=").unwrap_err();
        assert_eq!(err.to_string(), "Missing 'name' query parameter");
    }

    #[test]
    fn test_add_session_decodes_all_params() {
        let req = add_session("teacherId=1&courseId=2&date=2024-01-01").unwrap();
        assert_eq!(req.teacher_id, 1);
        assert_eq!(req.course_id, 2);
        assert_eq!(req.date, "2024-01-01");
    }

    #[test]
    fn test_add_session_missing_any_param() {
        for query in ["", "teacherId=1", "teacherId=1&courseId=2", "courseId=2&date=2024-01-01"] {
            let err = add_session(query).unwrap_err();
            assert_eq!(err.to_string(), "Missing one or more query parameters");
        }
    }

    #[test]
    fn test_add_session_invalid_integers() {
        let err = add_session("teacherId=abc&courseId=2&date=2024-01-01").unwrap_err();
        assert_eq!(err.to_string(), "Invalid 'teacherId' query parameter");

        let err = add_session("teacherId=1&courseId=abc&date=2024-01-01").unwrap_err();
        assert_eq!(err.to_string(), "Invalid 'courseId' query parameter");

        // Out of int32 range is invalid, not truncated
        let err = add_session("teacherId=2147483648&courseId=2&date=2024-01-01").unwrap_err();
        assert_eq!(err.to_string(), "Invalid 'teacherId' query parameter");
    }

    #[test]
    fn test_add_session_missing_checked_before_parsing() {
        // teacherId is unparseable but date is absent; the missing check wins
        let err = add_session("teacherId=abc&courseId=2").unwrap_err();
        assert_eq!(err.to_string(), "Missing one or more query parameters");
    }

    #[test]
    fn test_get_session_decodes_id() {
        let req = get_session("id=7").unwrap();
        assert_eq!(req.id, 7);
    }

    #[test]
    fn test_get_session_negative_id_parses() {
        let req = get_session("id=-3").unwrap();
        assert_eq!(req.id, -3);
    }

    #[test]
    fn test_get_session_missing_or_invalid_id() {
        let err = get_session("").unwrap_err();
        assert_eq!(err.to_string(), "Missing 'id' query parameter");

        let err = get_session("id=xyz").unwrap_err();
        assert_eq!(err.to_string(), "Invalid 'id' query parameter");
    }
}
