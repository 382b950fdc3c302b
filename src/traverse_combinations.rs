pub enum TraverseResult {
    /// Don't extend this sequence.
    Skip,
    Continue,
    /// Stop the whole traversal.
    Break,
}

struct StateToExpand<Combined> {
    combined_previous: Combined,
    item_index: usize,
}

/// Depth-first walk over every sequence of at most `depth_limit` items,
/// calling `cb` on each combined value, shortest prefix first.
///
/// The combiner can refuse an extension by returning `None`. A refused
/// sequence is never passed to `cb` and nothing that extends it is visited.
/// Each stack frame owns its combined value, so backing out of a sequence
/// needs no undo step.
pub fn traverse_combinations<Item, Combined, Combiner, Cb>(
    items: &[Item],
    depth_limit: usize,
    initial_combined: Combined,
    combiner: Combiner,
    cb: &mut Cb,
) where
    Combiner: Fn(&Combined, &Item) -> Option<Combined>,
    Cb: FnMut(&Combined) -> TraverseResult,
{
    match cb(&initial_combined) {
        TraverseResult::Continue => {}
        TraverseResult::Skip | TraverseResult::Break => return,
    }
    if items.is_empty() || depth_limit == 0 {
        return;
    }
    let mut fringe_stack: Vec<StateToExpand<Combined>> = vec![StateToExpand {
        item_index: 0,
        combined_previous: initial_combined,
    }];

    while let Some(state_to_expand) = fringe_stack.last() {
        let combined = combiner(
            &state_to_expand.combined_previous,
            &items[state_to_expand.item_index],
        );
        let result = match &combined {
            Some(combined) => cb(combined),
            None => TraverseResult::Skip,
        };
        match (result, combined) {
            (TraverseResult::Break, _) => break,
            (TraverseResult::Continue, Some(combined)) if fringe_stack.len() < depth_limit => {
                fringe_stack.push(StateToExpand {
                    combined_previous: combined,
                    item_index: 0,
                })
            }
            _ => increment(&mut fringe_stack, items.len()),
        }
    }
}

fn increment<Combined>(fringe_stack: &mut Vec<StateToExpand<Combined>>, num_items: usize) {
    while let Some(solution_to_increment) = fringe_stack.last_mut() {
        if solution_to_increment.item_index < num_items - 1 {
            solution_to_increment.item_index += 1;
            break;
        } else {
            fringe_stack.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_debug_snapshot;

    use super::*;

    fn push_char(str: &String, char: &char) -> Option<String> {
        let mut s2 = str.clone();
        s2.push(*char);
        Some(s2)
    }

    #[test]
    fn test_base_case() {
        let mut calls = vec![];
        traverse_combinations(&['a', 'b', 'c'], 2, String::new(), push_char, &mut |str| {
            calls.push(str.to_owned());
            TraverseResult::Continue
        });

        assert_debug_snapshot!(calls, @r###"
        [
            "",
            "a",
            "aa",
            "ab",
            "ac",
            "b",
            "ba",
            "bb",
            "bc",
            "c",
            "ca",
            "cb",
            "cc",
        ]
        "###);
    }

    #[test]
    fn test_skip() {
        let mut calls = vec![];
        traverse_combinations(&['a', 'b', 'c'], 2, String::new(), push_char, &mut |str| {
            calls.push(str.to_owned());
            if str.chars().nth(0) == Some('a') {
                TraverseResult::Skip
            } else {
                TraverseResult::Continue
            }
        });

        assert_debug_snapshot!(calls, @r###"
        [
            "",
            "a",
            "b",
            "ba",
            "bb",
            "bc",
            "c",
            "ca",
            "cb",
            "cc",
        ]
        "###);
    }

    #[test]
    fn test_combiner_refuses_repeats() {
        let mut calls = vec![];
        traverse_combinations(
            &['a', 'b'],
            3,
            String::new(),
            |str: &String, char: &char| {
                if str.ends_with(*char) {
                    None
                } else {
                    push_char(str, char)
                }
            },
            &mut |str| {
                calls.push(str.to_owned());
                TraverseResult::Continue
            },
        );

        assert_debug_snapshot!(calls, @r###"
        [
            "",
            "a",
            "ab",
            "aba",
            "b",
            "ba",
            "bab",
        ]
        "###);
    }

    #[test]
    fn test_break() {
        let mut calls = vec![];
        traverse_combinations(&['a', 'b', 'c'], 3, String::new(), push_char, &mut |str| {
            calls.push(str.to_owned());
            if str == "ab" {
                TraverseResult::Break
            } else {
                TraverseResult::Continue
            }
        });
        assert_eq!(calls, vec!["", "a", "aa", "aaa", "aab", "aac", "ab"]);

        let mut calls = 0;
        traverse_combinations(&['a'], 3, String::new(), push_char, &mut |_| {
            calls += 1;
            TraverseResult::Break
        });
        assert_eq!(calls, 1);
    }
}
