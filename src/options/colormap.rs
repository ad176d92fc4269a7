use std::str::FromStr;

use crate::foundation::error::WidgetError;

macro_rules! colormaps {
    ($($variant:ident => $name:literal),+ $(,)?) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        /// Palette names understood by the widget for region coloring.
        ///
        /// Purely a convenience: the widget receives the name as a plain string and nothing in
        /// this crate validates against the set.
        pub enum Colormap {
            $(
                #[doc = concat!("`", $name, "`")]
                #[serde(rename = $name)]
                $variant,
            )+
        }

        impl Colormap {
            /// Every known palette, in declaration order.
            pub const ALL: &'static [Colormap] = &[$(Colormap::$variant),+];

            /// Wire name.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Colormap::$variant => $name,)+
                }
            }
        }
    };
}

colormaps! {
    Jet => "jet",
    Hsv => "hsv",
    Hot => "hot",
    Cool => "cool",
    Spring => "spring",
    Summer => "summer",
    Autumn => "autumn",
    Winter => "winter",
    Bone => "bone",
    Copper => "copper",
    Greys => "greys",
    Greens => "greens",
    Bluered => "bluered",
    Rdbu => "RdBu",
    Picnic => "picnic",
    Rainbow => "rainbow",
    RainbowSoft => "rainbow-soft",
    Portland => "portland",
    Blackbody => "blackbody",
    Earth => "earth",
    Electric => "electric",
    Viridis => "viridis",
    Inferno => "inferno",
    Magma => "magma",
    Plasma => "plasma",
    Warm => "warm",
    Cubehelix => "cubehelix",
    Bathymetry => "bathymetry",
    Density => "density",
    Phase => "phase",
}

impl std::fmt::Display for Colormap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Colormap {
    type Err = WidgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| WidgetError::config(format!("unknown colormap '{s}'")))
    }
}

impl From<Colormap> for String {
    fn from(c: Colormap) -> Self {
        c.as_str().to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/options/colormap.rs"]
mod tests;
