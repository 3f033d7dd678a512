// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::error::ErrorReport;
use crate::error::fail;

/// A named colour palette.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Default,
    Ocean,
    Forest,
    Sunset,
}

impl Theme {
    pub const ALL: [Theme; 4] = [Theme::Default, Theme::Ocean, Theme::Forest, Theme::Sunset];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Default => "default",
            Theme::Ocean => "ocean",
            Theme::Forest => "forest",
            Theme::Sunset => "sunset",
        }
    }
}

impl TryFrom<&str> for Theme {
    type Error = ErrorReport;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "default" => Ok(Theme::Default),
            "ocean" => Ok(Theme::Ocean),
            "forest" => Ok(Theme::Forest),
            "sunset" => Ok(Theme::Sunset),
            _ => fail(format!("Invalid theme: {value}")),
        }
    }
}

/// The light/dark variant, independent of the theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Light,
    Dark,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Light => "light",
            Mode::Dark => "dark",
        }
    }

    /// The mode selected by the dark-mode toggle.
    pub fn from_toggle(checked: bool) -> Self {
        if checked { Mode::Dark } else { Mode::Light }
    }

    pub fn is_dark(&self) -> bool {
        *self == Mode::Dark
    }
}

impl TryFrom<&str> for Mode {
    type Error = ErrorReport;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "light" => Ok(Mode::Light),
            "dark" => Ok(Mode::Dark),
            _ => fail(format!("Invalid mode: {value}")),
        }
    }
}
