//! Instruction fragments for each Bloom's taxonomy level.
//!
//! The fragments describe the cognitive skill and list representative
//! action verbs. They are the domain knowledge that differentiates question
//! style between levels, so they are kept in full rather than abbreviated.

use quiz_primitives::BloomsLevel;

/// Returns the instruction fragment for the supplied level.
///
/// Total over the six levels; callers pass an already-validated level and
/// always get a non-empty fragment back.
#[must_use]
pub const fn instruction_fragment(level: BloomsLevel) -> &'static str {
    match level {
        BloomsLevel::Remember => {
            "Focus on recalling facts, terms, basic concepts, or answers. \
             Use verbs like define, list, memorize, recall, repeat, name."
        }
        BloomsLevel::Understand => {
            "Demonstrate understanding of facts and ideas. Use verbs like \
             classify, describe, discuss, explain, identify, locate, \
             recognize, report, select, translate."
        }
        BloomsLevel::Apply => {
            "Solve problems by applying acquired knowledge, facts, \
             techniques and rules in a different way. Use verbs like apply, \
             build, choose, construct, develop, experiment with, identify, \
             interview, make use of, model, organize, plan, select, solve, \
             utilize."
        }
        BloomsLevel::Analyze => {
            "Examine and break information into parts by identifying motives \
             or causes. Use verbs like analyze, categorize, classify, \
             compare, contrast, discover, dissect, divide, examine, inspect, \
             simplify, survey, take part in, test for, distinguish, list, \
             distinction, theme, relationships, function, motive, inference, \
             assumption, conclusion."
        }
        BloomsLevel::Evaluate => {
            "Present and defend opinions by making judgments about \
             information, validity of ideas or quality of work based on a \
             set of criteria. Use verbs like award, choose, conclude, \
             criticize, decide, defend, determine, dispute, evaluate, judge, \
             justify, measure, compare, mark, rate, recommend, rule on, \
             select, agree, interpret, explain, appraise, prioritize, \
             opinion, support, importance, criteria, prove, disprove, \
             assess, influence, perceive, value, estimate, influence, \
             deduct."
        }
        BloomsLevel::Create => {
            "Compile information together in a different way by combining \
             elements in a new pattern or proposing alternative solutions. \
             Use verbs like build, choose, combine, compile, compose, \
             construct, create, design, develop, estimate, formulate, \
             imagine, invent, make up, originate, plan, predict, propose, \
             solve, solution, suppose, discuss, modify, change, original, \
             improve, adapt, minimize, maximize, delete, theorize, \
             elaborate, test, improve, happen, change."
        }
    }
}
