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

mod spec;
mod value;

use crate::registry::{ArgId, CmdLine, Metadata};
use crate::value::{Value, ValueType};

pub(crate) fn tokens(args: &[&str]) -> Vec<String> {
    args.iter().map(|a| (*a).to_owned()).collect()
}

/// A registry modeling an image smoothing program: two mutually-exclusive
/// filter switches, a three-value radius option with a long-name-only
/// "kernel" alias (exclusive with it), a scalar standard deviation with a
/// default, and a required positional image file.
pub(crate) struct SmoothingCli {
    pub(crate) cmd: CmdLine,
    pub(crate) gaussian: ArgId,
    pub(crate) anisotropic: ArgId,
    pub(crate) std: ArgId,
    pub(crate) kernel: ArgId,
    pub(crate) radius: ArgId,
    pub(crate) image: ArgId,
}

pub(crate) fn smoothing_cli() -> SmoothingCli {
    let mut cmd = CmdLine::new(Metadata {
        name: "smoothimage".to_owned(),
        project: "basis".to_owned(),
        description:
            "This program smooths an input image using either a Gaussian filter or an \
             anisotropic diffusion filter."
                .to_owned(),
        examples: vec![
            "EXECNAME --gaussian --std 3.5 --radius 5 5 3 brain.nii\n\
             Smooths the image brain.nii using a Gaussian with standard deviation 3.5 \
             voxel units and 5 voxels in-slice radius and 3 voxels radius across slices."
                .to_owned(),
            "EXECNAME --anisotropic brain.nii\n\
             Smooths the image brain.nii using an anisotropic diffusion filter."
                .to_owned(),
        ],
        version: "1.0.0".to_owned(),
        copyright: "Copyright (c) 2011 University of Pennsylvania. All rights reserved."
            .to_owned(),
    });

    let gaussian = cmd
        .add_switch("gaussian", "Smooth image using a Gaussian filter.", Some('g'))
        .unwrap();
    let anisotropic = cmd
        .add_switch(
            "anisotropic",
            "Smooth image using anisotropic diffusion filter.",
            Some('a'),
        )
        .unwrap();
    let std = cmd
        .add_scalar(
            "std",
            "Standard deviation of Gaussian in voxel units.",
            Some('s'),
            ValueType::Double,
            false,
            Some(Value::Double(2.0)),
            Some("<float>"),
        )
        .unwrap();
    let kernel = cmd
        .add_multi_value(
            "kernel",
            "",
            None,
            ValueType::UnsignedInt,
            3,
            false,
            false,
            Some("<rx> <ry> <rz>"),
        )
        .unwrap();
    let radius = cmd
        .add_multi_value(
            "radius",
            "Radius of Gaussian kernel in each dimension.",
            Some('r'),
            ValueType::UnsignedInt,
            3,
            false,
            false,
            Some("<rx> <ry> <rz>"),
        )
        .unwrap();
    let image = cmd
        .add_positional(
            "image",
            "Image to be smoothed.",
            ValueType::Str,
            true,
            None,
            Some("<image>"),
        )
        .unwrap();

    cmd.add_exclusive_group(&[gaussian, anisotropic]).unwrap();
    cmd.add_exclusive_group(&[kernel, radius]).unwrap();

    SmoothingCli {
        cmd,
        gaussian,
        anisotropic,
        std,
        kernel,
        radius,
        image,
    }
}
