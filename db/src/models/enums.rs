use std::fmt;
use std::str::FromStr;
use utils::errors::EnumParseError;

macro_rules! string_enum {
    ($name:ident [$($value:ident => $label:expr),+ $(,)*]) => {

            #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
            pub enum $name {
                $(
                    $value,
                )*
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
                 let s = match self {
                      $(
                        $name::$value => $label,
                       )*
                    };
                    write!(f, "{}", s)
                }
            }

            impl FromStr for $name {
                type Err = EnumParseError;

                fn from_str(s: &str) -> Result<$name, EnumParseError> {
                  match s {
                      $(
                        $label => Ok($name::$value),
                       )*
                        _ => Err(EnumParseError {
                            message: "Could not parse value".to_string(),
                            enum_type: stringify!($name).to_string(),
                            value: s.to_string(),
                        })
                    }
                }
            }

            impl ::serde::Serialize for $name {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: ::serde::Serializer,
                {
                    serializer.serialize_str(&self.to_string())
                }
            }

            impl<'de> ::serde::Deserialize<'de> for $name {
                fn deserialize<D>(deserializer: D) -> Result<$name, D::Error>
                where
                    D: ::serde::Deserializer<'de>,
                {
                    let s = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                    s.parse::<$name>().map_err(::serde::de::Error::custom)
                }
            }
        }
}

// The fixed vocabulary of genre tags a venue or artist can carry. The
// labels, not the variant names, are the storage encoding.
string_enum! { Genre [
    Alternative => "Alternative",
    Blues => "Blues",
    Classical => "Classical",
    Country => "Country",
    Electronic => "Electronic",
    Folk => "Folk",
    Funk => "Funk",
    HipHop => "Hip-Hop",
    HeavyMetal => "Heavy Metal",
    Instrumental => "Instrumental",
    Jazz => "Jazz",
    MusicalTheatre => "Musical Theatre",
    Pop => "Pop",
    Punk => "Punk",
    RAndB => "R&B",
    Reggae => "Reggae",
    RockNRoll => "Rock n Roll",
    Soul => "Soul",
    Other => "Other",
]}
