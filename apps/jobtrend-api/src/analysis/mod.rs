// Resume analysis pipeline.
// text → skills → categories → gaps → recommendations → ranked job matches.
// Every stage is a pure function over the static tables in its module.

pub mod experience;
pub mod gaps;
pub mod matching;
pub mod recommendations;
pub mod report;
pub mod skills;
