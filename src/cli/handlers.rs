use std::time::Instant;

use crate::{
    core::{
        bounds::{graph_dims, terminal_geometry, y_label_width},
        config::Config,
        data::read_csv_from_path,
        error::GraphError,
    },
    render::LineGraph,
};

use super::parse::CsvArgs;

pub fn csv(a: CsvArgs) -> Result<(), GraphError> {
    let t_ingest = Instant::now();
    let mut data = read_csv_from_path(&a.file)?;
    if a.sort {
        data.sort_by(|l, r| l.x.total_cmp(&r.x));
    }
    let dur_ingest = t_ingest.elapsed().as_micros();

    // config: explicit dimensions win, otherwise fit the terminal
    let (auto_w, auto_h) = graph_dims(terminal_geometry(), y_label_width(&data));
    let cfg = Config::builder()
        .width(a.width.unwrap_or(auto_w))
        .height(a.height.unwrap_or(auto_h))
        .title_opt(&a.title)
        .x_axis_title_opt(&a.x_title)
        .y_axis_title_opt(&a.y_title)
        .resolution(a.resolution)
        .build()?;

    let t_render = Instant::now();
    let graph = LineGraph::render(&data, &cfg)?;
    if a.debug {
        eprintln!(
            "CSV ingest: {dur_ingest} µs   ({} rows)   render: {} µs",
            data.len(),
            t_render.elapsed().as_micros()
        );
    }

    println!("{}", graph.content());
    Ok(())
}

/// Print handy invocations for new users.
pub fn examples() {
    let bin = "line-graph";
    println!(
        "
Example invocations
-------------------
• Plot a CSV          : {bin} csv data.csv
• Read from stdin     : cat data.csv | {bin} csv
• Custom title        : {bin} csv data.csv --title \"Monthly Revenue\"
• Axis titles         : {bin} csv data.csv --x-title Day --y-title Count
• Fixed size          : {bin} csv data.csv --width 60 --height 15
• Thin a dense series : {bin} csv data.csv --resolution 0.25
• Unsorted input      : {bin} csv data.csv --sort
• Debug mode          : {bin} csv data.csv --debug
"
    );
}
