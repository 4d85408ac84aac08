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
use crate::spec::Spec;
use crate::value::{Value, ValueType};

#[test]
fn test_switch_matching_is_exact() {
    let spec = Spec::switch("gaussian", "", Some('g'));
    assert!(spec.matches("--gaussian"));
    assert!(spec.matches("-g"));
    assert!(!spec.matches("gaussian"));
    assert!(!spec.matches("-gaussian"));
    assert!(!spec.matches("--gauss"));
    assert!(!spec.matches("--gaussian2"));
    assert!(!spec.matches("--GAUSSIAN"));
    assert!(!spec.matches("-G"));
    assert!(!spec.matches("-gg"));
    assert!(!spec.matches("--g"));
}

#[test]
fn test_long_only_matching() {
    let spec = Spec::multi("kernel", "", None, ValueType::UnsignedInt, 3, false, false, None)
        .unwrap();
    assert!(spec.matches("--kernel"));
    assert!(!spec.matches("-k"));
}

#[test]
fn test_positional_never_matches_by_token() {
    let spec = Spec::positional("image", "", ValueType::Str, true, None, None).unwrap();
    assert!(!spec.matches("--image"));
    assert!(!spec.matches("image"));
    assert!(!spec.matches("brain.nii"));
}

#[test]
fn test_arity_per_kind() {
    assert_eq!(0, Spec::switch("g", "", None).arity());
    assert_eq!(
        1,
        Spec::scalar("std", "", None, ValueType::Double, false, None, None)
            .unwrap()
            .arity()
    );
    assert_eq!(
        3,
        Spec::multi("radius", "", None, ValueType::UnsignedInt, 3, false, false, None)
            .unwrap()
            .arity()
    );
    assert_eq!(
        1,
        Spec::positional("image", "", ValueType::Str, true, None, None)
            .unwrap()
            .arity()
    );
}

#[test]
fn test_multi_requires_nonzero_arity() {
    assert!(matches!(
        Spec::multi("radius", "", None, ValueType::UnsignedInt, 0, false, false, None)
            .unwrap_err(),
        Error::InvalidArgument(_)
    ));
}

#[test]
fn test_default_value_type_must_agree() {
    assert!(matches!(
        Spec::scalar(
            "std",
            "",
            None,
            ValueType::Double,
            false,
            Some(Value::Str("2.0".to_owned())),
            None
        )
        .unwrap_err(),
        Error::InvalidArgument(_)
    ));
    assert!(Spec::scalar(
        "std",
        "",
        None,
        ValueType::Double,
        false,
        Some(Value::Double(2.0)),
        None
    )
    .is_ok());
}

#[test]
fn test_value_placeholder() {
    let with_desc = Spec::scalar(
        "std",
        "",
        None,
        ValueType::Double,
        false,
        None,
        Some("<float>"),
    )
    .unwrap();
    assert_eq!("<float>", with_desc.value_placeholder());

    let derived = Spec::scalar("std", "", None, ValueType::Double, false, None, None).unwrap();
    assert_eq!("<std>", derived.value_placeholder());

    let derived_multi =
        Spec::multi("radius", "", None, ValueType::UnsignedInt, 3, false, false, None).unwrap();
    assert_eq!("<radius> <radius> <radius>", derived_multi.value_placeholder());
}

#[test]
fn test_switch_defaults_to_false() {
    let spec = Spec::switch("gaussian", "", None);
    assert_eq!(Some(vec![Value::Bool(false)]), spec.default_values());
}
