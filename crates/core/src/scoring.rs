//! Static weight table and the scoring pass over a completed answer set.

use crate::model::{AnswerSet, Group, QuestionKey};

/// Groups weighted by selecting `option` on the question identified by `key`.
///
/// Unknown key/option combinations carry no weight; the state machine keeps
/// answers aligned with the catalog, so an empty slice here only shows up for
/// data that bypassed it.
#[must_use]
pub fn weighted_groups(key: QuestionKey, option: &str) -> &'static [Group] {
    use Group::{CommunityDiscourse, DataSuperheroes, StreamlitCreators, TheSquad, UserGroups};

    match key.as_str() {
        "engagement" => match option {
            "Learning and reading from others' experiences" => &[CommunityDiscourse],
            "Creating content, apps or tools" => &[DataSuperheroes, StreamlitCreators],
            "Answering technical questions or helping others" => &[TheSquad],
            "Attending in-person events and networking" => &[UserGroups],
            _ => &[],
        },
        "motivation" => match option {
            "Recognition as a leader and visibility into upcoming product innovations" => {
                &[DataSuperheroes, StreamlitCreators]
            }
            "Connecting with others who geek out on the same stuff" => &[UserGroups],
            "Giving back and helping people learn" => &[TheSquad],
            "Learning and upskilling" => &[CommunityDiscourse],
            _ => &[],
        },
        "contributions" => match option {
            "Sharing insights and driving thought leadership through speaking engagements and content creation" => {
                &[DataSuperheroes, StreamlitCreators]
            }
            "Answering questions or giving feedback" => &[TheSquad],
            "Collaborating with others in real time, learning from peers, and connecting over shared interests" => {
                &[UserGroups]
            }
            "Just attending and learning" => &[CommunityDiscourse, UserGroups],
            _ => &[],
        },
        "tech_level" => match option {
            "Advanced: I am proficient with multiple programming languages and can architect complex systems independently." => {
                &[DataSuperheroes, StreamlitCreators]
            }
            "Intermediate: I can use data tools and build apps with some guidance and/or reference material." => {
                &[UserGroups, TheSquad]
            }
            "Beginner: I'm still learning and exploring." => &[CommunityDiscourse, UserGroups],
            _ => &[],
        },
        _ => &[],
    }
}

/// Per-group counters accumulated from one answer set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scorecard {
    counts: [u32; Group::ALL.len()],
}

impl Scorecard {
    fn slot(group: Group) -> usize {
        group as usize
    }

    /// Score accumulated by `group`.
    #[must_use]
    pub fn score(&self, group: Group) -> u32 {
        self.counts[Self::slot(group)]
    }

    /// The highest score on the card. Zero when nothing was counted.
    #[must_use]
    pub fn max_score(&self) -> u32 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Groups tied at the maximum score, in `Group::ALL` order.
    #[must_use]
    pub fn top_groups(&self) -> Vec<Group> {
        let max = self.max_score();
        Group::ALL
            .into_iter()
            .filter(|g| self.score(*g) == max)
            .collect()
    }

    /// The winning group: the first maximal group in `Group::ALL` order.
    ///
    /// Ties are broken by declaration order. The contract is only that the
    /// returned group's score equals the maximum; the specific pick among
    /// tied groups is a documented policy, not a semantic requirement.
    #[must_use]
    pub fn winner(&self) -> Group {
        let max = self.max_score();
        Group::ALL
            .into_iter()
            .find(|g| self.score(*g) == max)
            .unwrap_or(Group::ALL[0])
    }

    fn add(&mut self, group: Group) {
        let slot = Self::slot(group);
        self.counts[slot] = self.counts[slot].saturating_add(1);
    }
}

/// Scores an answer set against the static weight table.
///
/// Each recorded answer contributes one point to every group listed for its
/// question/option pair. Questions without answers contribute nothing.
#[must_use]
pub fn score_answers(answers: &AnswerSet) -> Scorecard {
    let mut card = Scorecard::default();
    for (key, option) in answers.iter() {
        for group in weighted_groups(key, option) {
            card.add(*group);
        }
    }
    card
}
