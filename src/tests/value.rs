// Copyright 2015 Axel Rasmussen
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::error::Error;
use crate::value::{convert, Value, ValueType};

#[test]
fn test_convert_unsigned_int() {
    assert_eq!(
        Value::UnsignedInt(0),
        convert("radius", "0", ValueType::UnsignedInt).unwrap()
    );
    assert_eq!(
        Value::UnsignedInt(12345),
        convert("radius", "12345", ValueType::UnsignedInt).unwrap()
    );
    assert_eq!(
        Value::UnsignedInt(u64::MAX),
        convert("radius", "18446744073709551615", ValueType::UnsignedInt).unwrap()
    );
}

#[test]
fn test_convert_negative_unsigned_int_is_out_of_range() {
    let err = convert("radius", "-3", ValueType::UnsignedInt).unwrap_err();
    assert!(matches!(err, Error::ValueOutOfRange { .. }));
    assert_eq!("Value '-3' for argument 'radius' is out of range", err.to_string());
}

#[test]
fn test_convert_overflowing_unsigned_int_is_out_of_range() {
    assert!(matches!(
        convert("radius", "18446744073709551616", ValueType::UnsignedInt).unwrap_err(),
        Error::ValueOutOfRange { .. }
    ));
}

#[test]
fn test_convert_non_numeric_unsigned_int_is_invalid() {
    let err = convert("radius", "five", ValueType::UnsignedInt).unwrap_err();
    assert!(matches!(err, Error::InvalidValueFormat { .. }));
    assert_eq!(
        "Invalid unsigned integer value 'five' for argument 'radius'",
        err.to_string()
    );
}

#[test]
fn test_convert_double() {
    assert_eq!(
        Value::Double(3.5),
        convert("std", "3.5", ValueType::Double).unwrap()
    );
    assert_eq!(
        Value::Double(-0.25),
        convert("std", "-0.25", ValueType::Double).unwrap()
    );
    assert_eq!(
        Value::Double(200000.0),
        convert("std", "2e5", ValueType::Double).unwrap()
    );
}

#[test]
fn test_convert_bad_double_is_invalid() {
    assert!(matches!(
        convert("std", "fast", ValueType::Double).unwrap_err(),
        Error::InvalidValueFormat { .. }
    ));
}

#[test]
fn test_convert_overflowing_double_is_out_of_range() {
    assert!(matches!(
        convert("std", "2e9999", ValueType::Double).unwrap_err(),
        Error::ValueOutOfRange { .. }
    ));
}

#[test]
fn test_convert_explicit_infinity_is_accepted() {
    let v = convert("std", "inf", ValueType::Double).unwrap();
    assert_eq!(Some(f64::INFINITY), v.as_f64());
}

#[test]
fn test_convert_string_is_identity() {
    assert_eq!(
        Value::Str("brain.nii".to_owned()),
        convert("image", "brain.nii", ValueType::Str).unwrap()
    );
    // Even numeric-looking tokens are taken verbatim.
    assert_eq!(
        Value::Str("3.5".to_owned()),
        convert("image", "3.5", ValueType::Str).unwrap()
    );
}

#[test]
fn test_typed_accessors() {
    assert_eq!(Some(true), Value::Bool(true).as_bool());
    assert_eq!(None, Value::Bool(true).as_u64());
    assert_eq!(Some(7), Value::UnsignedInt(7).as_u64());
    assert_eq!(Some(2.5), Value::Double(2.5).as_f64());
    assert_eq!(Some("x"), Value::Str("x".to_owned()).as_str());
    assert_eq!(None, Value::Str("x".to_owned()).as_f64());
}
