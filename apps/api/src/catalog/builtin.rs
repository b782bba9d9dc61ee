//! The problem set shipped with the service, grouped by company.

use super::models::{Problem, TestCase};

const ALL_LANGUAGES: &[&str] = &["cpp", "java", "python", "javascript"];

struct Header<'a> {
    id: &'a str,
    title: &'a str,
    company: &'a str,
    difficulty: &'a str,
    description: &'a str,
    input_format: &'a str,
    output_format: &'a str,
    constraints: &'a [&'a str],
}

fn problem(
    header: Header<'_>,
    sample_tests: Vec<TestCase>,
    hidden_tests: Vec<TestCase>,
) -> Problem {
    Problem {
        id: header.id.to_string(),
        title: header.title.to_string(),
        company: header.company.to_string(),
        difficulty: header.difficulty.to_string(),
        description: header.description.to_string(),
        input_format: header.input_format.to_string(),
        output_format: header.output_format.to_string(),
        constraints: header.constraints.iter().map(|c| c.to_string()).collect(),
        sample_tests,
        hidden_tests,
        allowed_languages: ALL_LANGUAGES.iter().map(|l| l.to_string()).collect(),
    }
}

pub fn problems() -> Vec<Problem> {
    vec![
        // ── Google ──────────────────────────────────────────────────────────
        problem(
            Header {
                id: "g1",
                title: "Two Sum",
                company: "Google",
                difficulty: "Easy",
                description: "Given an array nums and an integer target, return the indices of two numbers such that they add up to target. Assume exactly one solution exists.",
                input_format: "First line: integer n\nSecond line: n space-separated integers\nThird line: target",
                output_format: "Print two indices i j (0-based).",
                constraints: &[
                    "2 <= n <= 10^5",
                    "-10^9 <= nums[i] <= 10^9",
                    "-10^9 <= target <= 10^9",
                ],
            },
            vec![TestCase::sample("Sample 1", "4\n2 7 11 15\n9\n", "0 1\n").explained("2 + 7 = 9")],
            vec![
                TestCase::hidden("Hidden 1", "3\n3 3 3\n6\n", "0 1\n"),
                TestCase::hidden("Hidden 2", "5\n1 2 3 4 5\n9\n", "3 4\n"),
            ],
        ),
        problem(
            Header {
                id: "g2",
                title: "Search in Rotated Sorted Array",
                company: "Google",
                difficulty: "Medium",
                description: "Given a rotated sorted array and a target, return its index. Return -1 if not found.",
                input_format: "n\nn space-separated integers\ntarget",
                output_format: "Print index of target.",
                constraints: &["1 <= n <= 10^5"],
            },
            vec![TestCase::sample("Sample 1", "7\n4 5 6 7 0 1 2\n0\n", "4\n")],
            vec![
                TestCase::hidden("Hidden 1", "5\n1 3 5 7 9\n3\n", "1\n"),
                TestCase::hidden("Hidden 2", "5\n6 7 1 2 3\n9\n", "-1\n"),
            ],
        ),
        problem(
            Header {
                id: "g3",
                title: "Word Ladder",
                company: "Google",
                difficulty: "Hard",
                description: "Given a beginWord, endWord, and a dictionary, return the length of shortest transformation sequence.",
                input_format: "beginWord endWord\nn\nn space-separated dictionary words",
                output_format: "Print length of sequence.",
                constraints: &["1 <= n <= 5000"],
            },
            vec![TestCase::sample("Sample 1", "hit cog\n6\nhot dot dog lot log cog\n", "5\n")],
            vec![TestCase::hidden("Hidden 1", "hit cog\n3\nhot dot dog\n", "0\n")],
        ),
        // ── Amazon ──────────────────────────────────────────────────────────
        problem(
            Header {
                id: "a1",
                title: "Longest Substring Without Repeating Characters",
                company: "Amazon",
                difficulty: "Medium",
                description: "Given a string s, return the length of the longest substring without repeating characters.",
                input_format: "Single line: string s",
                output_format: "Print integer length.",
                constraints: &["1 <= |s| <= 10^5"],
            },
            vec![TestCase::sample("Sample 1", "abcabcbb\n", "3\n")],
            vec![
                TestCase::hidden("Hidden 1", "bbbbb\n", "1\n"),
                TestCase::hidden("Hidden 2", "pwwkew\n", "3\n"),
            ],
        ),
        problem(
            Header {
                id: "a2",
                title: "LRU Cache",
                company: "Amazon",
                difficulty: "Hard",
                description: "Design an LRU cache supporting get(key) and put(key,val) in O(1).",
                input_format: "First line: capacity\nNext lines: operations in format (type key value). type=1(get), 2(put)",
                output_format: "Print outputs of get operations.",
                constraints: &["1 <= capacity <= 10000"],
            },
            vec![TestCase::sample("Sample 1", "2\n2 1 1\n2 2 2\n1 1\n2 3 3\n1 2\n", "1 -1\n")],
            vec![TestCase::hidden("Hidden 1", "1\n2 1 1\n2 2 2\n1 1\n", "-1\n")],
        ),
        // ── Microsoft ───────────────────────────────────────────────────────
        problem(
            Header {
                id: "m1",
                title: "Number of Islands",
                company: "Microsoft",
                difficulty: "Medium",
                description: "Given grid of 0s and 1s, count number of islands (connected 1s).",
                input_format: "Rows Columns\ngrid rows...",
                output_format: "Print integer count.",
                constraints: &["1 <= grid <= 2000x2000"],
            },
            vec![TestCase::sample("Sample 1", "4 5\n11110\n11010\n11000\n00000\n", "1\n")],
            vec![TestCase::hidden("Hidden 1", "3 3\n110\n110\n001\n", "2\n")],
        ),
        problem(
            Header {
                id: "m2",
                title: "Merge Intervals",
                company: "Microsoft",
                difficulty: "Medium",
                description: "Given intervals, merge all overlapping intervals.",
                input_format: "n\nn lines of: start end",
                output_format: "Print merged intervals.",
                constraints: &["1 <= n <= 10^5"],
            },
            vec![TestCase::sample("Sample 1", "4\n1 3\n2 6\n8 10\n15 18\n", "1 6\n8 10\n15 18\n")],
            vec![TestCase::hidden("Hidden 1", "2\n1 4\n4 5\n", "1 5\n")],
        ),
        // ── Meta ────────────────────────────────────────────────────────────
        problem(
            Header {
                id: "fb1",
                title: "Clone Graph",
                company: "Meta",
                difficulty: "Medium",
                description: "Clone an undirected graph. Each node contains a value and list of neighbors.",
                input_format: "Serialized adjacency list",
                output_format: "Print cloned graph in same format.",
                constraints: &["1 <= nodes <= 100"],
            },
            vec![TestCase::sample(
                "Sample 1",
                "1 [[2,4],[1,3],[2,4],[1,3]]\n",
                "1 [[2,4],[1,3],[2,4],[1,3]]\n",
            )],
            vec![],
        ),
        problem(
            Header {
                id: "fb2",
                title: "Minimum Window Substring",
                company: "Meta",
                difficulty: "Hard",
                description: "Find minimum window in s which contains all characters of t.",
                input_format: "String s\nString t",
                output_format: "Smallest substring",
                constraints: &["1 <= |s|, |t| <= 10^5"],
            },
            vec![TestCase::sample("Sample 1", "ADOBECODEBANC\nABC\n", "BANC\n")],
            vec![],
        ),
        // ── Netflix ─────────────────────────────────────────────────────────
        problem(
            Header {
                id: "n1",
                title: "Top K Frequent Elements",
                company: "Netflix",
                difficulty: "Medium",
                description: "Given integer array nums and integer k, return k most frequent elements.",
                input_format: "n\nn numbers\nk",
                output_format: "k elements in any order.",
                constraints: &["1 <= n <= 10^5"],
            },
            vec![TestCase::sample("Sample 1", "6\n1 1 1 2 2 3\n2\n", "1 2\n")],
            vec![],
        ),
        // ── Uber ────────────────────────────────────────────────────────────
        problem(
            Header {
                id: "u1",
                title: "Meeting Rooms II",
                company: "Uber",
                difficulty: "Medium",
                description: "Given meeting times, return minimum number of rooms required.",
                input_format: "n\nn lines start end",
                output_format: "Print integer",
                constraints: &["1 <= n <= 10^5"],
            },
            vec![TestCase::sample("Sample 1", "3\n0 30\n5 10\n15 20\n", "2\n")],
            vec![],
        ),
    ]
}
