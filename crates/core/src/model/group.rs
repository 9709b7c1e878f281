use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use url::Url;

//
// ─── GROUPS ────────────────────────────────────────────────────────────────────
//

/// One of the five weighted community groups.
///
/// Groups are the internal scoring categories; the user only ever sees the
/// [`Persona`] a group maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    DataSuperheroes,
    StreamlitCreators,
    TheSquad,
    UserGroups,
    CommunityDiscourse,
}

impl Group {
    /// All groups in declaration order.
    ///
    /// This order doubles as the tie-break order: when several groups share
    /// the top score, the first of them in this list wins.
    pub const ALL: [Group; 5] = [
        Group::DataSuperheroes,
        Group::StreamlitCreators,
        Group::TheSquad,
        Group::UserGroups,
        Group::CommunityDiscourse,
    ];

    /// Human-readable group name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Group::DataSuperheroes => "Data Superheroes",
            Group::StreamlitCreators => "Streamlit Creators",
            Group::TheSquad => "The Squad",
            Group::UserGroups => "User Groups",
            Group::CommunityDiscourse => "Community Discourse",
        }
    }

    /// The user-facing persona this group belongs to.
    ///
    /// Data Superheroes and Streamlit Creators share a persona.
    #[must_use]
    pub fn persona(&self) -> Persona {
        match self {
            Group::DataSuperheroes | Group::StreamlitCreators => Persona::Visionary,
            Group::TheSquad => Persona::Connector,
            Group::UserGroups => Persona::Gatherer,
            Group::CommunityDiscourse => Persona::Guide,
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//
// ─── PERSONAS ──────────────────────────────────────────────────────────────────
//

/// Error type for parsing a persona from its stored label.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown persona label: {0:?}")]
pub struct PersonaParseError(String);

/// One of the four user-facing result labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Persona {
    Visionary,
    Connector,
    Gatherer,
    Guide,
}

impl Persona {
    pub const ALL: [Persona; 4] = [
        Persona::Visionary,
        Persona::Connector,
        Persona::Gatherer,
        Persona::Guide,
    ];

    /// The label shown to the user and stored with each response.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Persona::Visionary => "The Visionary",
            Persona::Connector => "The Connector",
            Persona::Gatherer => "The Gatherer",
            Persona::Guide => "The Guide",
        }
    }

    /// Parses a persona back from its stored label.
    ///
    /// # Errors
    ///
    /// Returns `PersonaParseError` if the label is not one of the four known
    /// values.
    pub fn from_label(label: &str) -> Result<Self, PersonaParseError> {
        match label {
            "The Visionary" => Ok(Persona::Visionary),
            "The Connector" => Ok(Persona::Connector),
            "The Gatherer" => Ok(Persona::Gatherer),
            "The Guide" => Ok(Persona::Guide),
            other => Err(PersonaParseError(other.to_owned())),
        }
    }

    /// Short description shown directly under the result label.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Persona::Visionary => {
                "You build, you code, you share. Whether it's open-source tools, mind-blowing \
                 apps, or content that inspires, your ideas shape the future—and you're not \
                 afraid to push boundaries."
            }
            Persona::Connector => {
                "You're a collaborator, connector, and behind-the-scenes powerhouse. You build \
                 bridges between people, tools, and ideas to make awesome things happen."
            }
            Persona::Gatherer => {
                "You believe magic happens when people come together. You thrive in group \
                 settings and love learning alongside others."
            }
            Persona::Guide => {
                "You've got answers, insights, and a keyboard that never sleeps. Whether you're \
                 debugging or deep-diving into docs, you help others grow with clarity and \
                 curiosity."
            }
        }
    }

    /// Long-form "why this fits you" message for the result page.
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Persona::Visionary => {
                "You're part of a community of innovators and creators who thrive on bringing \
                 ideas to life. Your passion for building, coding, and sharing represents the \
                 essence of creative technology. Whether you're contributing to open-source \
                 projects that benefit many, developing applications that solve real problems, \
                 or creating content that inspires others, you're actively shaping our digital \
                 future. What makes you special is your willingness to push beyond conventional \
                 boundaries—you see possibilities where others see limitations. Your technical \
                 skills combined with your creative vision make you a valuable force in this \
                 community of builders."
            }
            Persona::Connector => {
                "You have a natural gift for bringing people together and making collaboration \
                 flourish. As a connector, you see the invisible threads that link different \
                 worlds and know exactly how to weave them into something remarkable. Your \
                 strength lies not just in your own abilities, but in how you amplify the \
                 talents of everyone around you. Whether you're facilitating communication \
                 between teams, integrating diverse tools into seamless workflows, or finding \
                 the perfect partnerships to bring ideas to life, you're the essential catalyst \
                 that transforms possibility into reality. Your behind-the-scenes coordination \
                 may not always get the spotlight, but the incredible outcomes of your \
                 bridge-building speak volumes."
            }
            Persona::Gatherer => {
                "You have a special talent for creating spaces where connections bloom and \
                 ideas flourish. As a natural gatherer, you understand that true innovation \
                 rarely happens in isolation—it emerges from the beautiful collision of diverse \
                 perspectives coming together. Your energy lights up collaborative \
                 environments, whether virtual or in-person, and you have an intuitive sense \
                 for bringing the right people into conversation. The joy you find in \
                 collective learning experiences reflects your belief that knowledge grows \
                 stronger when shared. Your ability to foster communities where everyone feels \
                 valued makes you an invaluable catalyst for group creativity and \
                 problem-solving."
            }
            Persona::Guide => {
                "You embody the perfect blend of technical expertise and patient mentorship \
                 that helps communities thrive. Your knowledge runs deep, but what truly sets \
                 you apart is your genuine desire to illuminate paths for others. When \
                 questions arise or challenges seem insurmountable, you're there with \
                 thoughtful explanations and practical solutions that empower rather than \
                 simply solve. Your approach combines technical precision with a refreshing \
                 curiosity that encourages continuous learning. Through your detailed \
                 documentation, insightful troubleshooting, and consistent presence, you \
                 create ripples of growth that extend far beyond individual interactions."
            }
        }
    }

    /// File name of the result illustration.
    ///
    /// The names reproduce the upstream asset set verbatim, including the
    /// irregular spellings.
    #[must_use]
    pub fn image_file(&self) -> &'static str {
        match self {
            Persona::Visionary => "VISIONARY.png",
            Persona::Connector => "CONNECTORide.png",
            Persona::Gatherer => "GATHERER.png",
            Persona::Guide => "GUIDE .png",
        }
    }

    /// Call-to-action links for the groups behind this persona.
    #[must_use]
    pub fn ctas(&self) -> &'static [Cta] {
        match self {
            Persona::Visionary => &[
                Cta {
                    title: "Data Superheroes",
                    href: "https://www.snowflake.com/en/data-superheroes/",
                },
                Cta {
                    title: "Streamlit Creators",
                    href: "https://streamlit.io/become-a-creator",
                },
            ],
            Persona::Connector => &[Cta {
                title: "The Squad",
                href: "https://www.snowflake.com/en/snowflake-squad/",
            }],
            Persona::Gatherer => &[Cta {
                title: "User Groups",
                href: "https://usergroups.snowflake.com/",
            }],
            Persona::Guide => &[
                Cta {
                    title: "Streamlit Community",
                    href: "https://streamlit.io/community",
                },
                Cta {
                    title: "Snowflake Community",
                    href: "https://snowflake.discourse.group/",
                },
            ],
        }
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Persona {
    type Err = PersonaParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

//
// ─── CALLS TO ACTION ───────────────────────────────────────────────────────────
//

/// A titled link inviting the user to join one of the community programs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cta {
    title: &'static str,
    href: &'static str,
}

impl Cta {
    #[must_use]
    pub fn title(&self) -> &'static str {
        self.title
    }

    #[must_use]
    pub fn href(&self) -> &'static str {
        self.href
    }

    /// Parses the link target as a validated URL.
    ///
    /// # Errors
    ///
    /// Returns `url::ParseError` if the stored link is malformed.
    pub fn url(&self) -> Result<Url, url::ParseError> {
        Url::parse(self.href)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
