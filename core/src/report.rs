use crate::driver::RunResult;
use crate::error::Result;

pub const TITLE: &str = "Function Call Profiling Results:";

const HEADERS: [&str; 6] = [
    "Parallel",
    "Tools",
    "Complexity",
    "Tool Calls",
    "Total Time (s)",
    "Tool Time (s)",
];

#[derive(Clone, Copy)]
enum Align {
    Left,
    Right,
}

const ALIGN: [Align; 6] = [
    Align::Left,
    Align::Right,
    Align::Left,
    Align::Left,
    Align::Right,
    Align::Right,
];

// headers get at least this much breathing room
const MIN_PADDING: usize = 2;

fn row(result: &RunResult) -> [String; 6] {
    [
        if result.parallel { "Yes" } else { "No" }.to_string(),
        result.num_tools.to_string(),
        result.complexity.to_string(),
        format!("{:?}", result.tool_calls),
        format!("{:.2}", result.total_time),
        format!("{:.2}", result.tool_execution_time),
    ]
}

/// Renders results as a bordered grid, one row per scenario in input order.
pub fn render_table(results: &[RunResult]) -> String {
    let rows: Vec<[String; 6]> = results.iter().map(row).collect();

    let mut widths = HEADERS.map(|h| h.chars().count() + MIN_PADDING);
    for cells in &rows {
        for (w, cell) in widths.iter_mut().zip(cells) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let rule = |fill: char| -> String {
        let mut line = String::from("+");
        for w in widths {
            line.extend(std::iter::repeat(fill).take(w + 2));
            line.push('+');
        }
        line
    };
    let line = |cells: &[&str]| -> String {
        let mut out = String::from("|");
        for ((cell, w), align) in cells.iter().zip(widths).zip(ALIGN) {
            let padded = match align {
                Align::Left => format!(" {cell:<w$} "),
                Align::Right => format!(" {cell:>w$} "),
            };
            out.push_str(&padded);
            out.push('|');
        }
        out
    };

    let mut lines = vec![rule('-'), line(&HEADERS), rule('=')];
    for cells in &rows {
        let cells: Vec<&str> = cells.iter().map(String::as_str).collect();
        lines.push(line(&cells));
        lines.push(rule('-'));
    }
    if rows.is_empty() {
        lines.pop();
        lines.push(rule('-'));
    }
    lines.join("\n")
}

pub fn render_json(results: &[RunResult]) -> Result<String> {
    Ok(serde_json::to_string_pretty(results)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Complexity;

    fn result(parallel: bool, tool_calls: Vec<usize>) -> RunResult {
        RunResult {
            total_time: 3.1,
            tool_execution_time: 2.5,
            tool_calls,
            num_tools: 2,
            parallel,
            complexity: Complexity::Simple,
        }
    }

    #[test]
    fn renders_grid() {
        let table = render_table(&[result(false, vec![1, 1]), result(true, vec![2])]);
        let expected = "\
+------------+---------+--------------+--------------+------------------+-----------------+
| Parallel   |   Tools | Complexity   | Tool Calls   |   Total Time (s) |   Tool Time (s) |
+============+=========+==============+==============+==================+=================+
| No         |       2 | simple       | [1, 1]       |             3.10 |            2.50 |
+------------+---------+--------------+--------------+------------------+-----------------+
| Yes        |       2 | simple       | [2]          |             3.10 |            2.50 |
+------------+---------+--------------+--------------+------------------+-----------------+";
        assert_eq!(table, expected);
    }

    #[test]
    fn wide_cells_stretch_columns() {
        let table = render_table(&[result(true, vec![1, 1, 1, 1, 1, 1, 1])]);
        assert!(table.contains("| [1, 1, 1, 1, 1, 1, 1] |"));
        let widths: Vec<usize> = table.lines().map(|l| l.len()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn rendering_is_idempotent() {
        let results = vec![result(false, vec![]), result(true, vec![5])];
        assert_eq!(render_table(&results), render_table(&results));
        assert!(render_table(&results).contains("| []           |"));
    }

    #[test]
    fn empty_input_still_has_header() {
        let table = render_table(&[]);
        assert_eq!(table.lines().count(), 3);
        assert!(table.starts_with("+---"));
        assert!(table.lines().last().unwrap().starts_with("+---"));
    }

    #[test]
    fn json_lists_each_result() {
        let json = render_json(&[result(true, vec![2])]).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["tool_calls"], serde_json::json!([2]));
        assert_eq!(parsed[0]["complexity"], "simple");
    }
}
