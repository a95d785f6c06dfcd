use std::fs;
use std::path::Path;

use serde_json::Value;

use super::error::Result;

mod line;
mod map;

pub use line::LineChart;
pub use map::{Bucket, MapChart};


static ECHARTS_JS: &'static str = "https://assets.pyecharts.org/assets/echarts.min.js";
pub(crate) static CHINA_MAP_JS: &'static str = "https://assets.pyecharts.org/assets/maps/china.js";

static PAGE_TEMPLATE: &'static str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>__TITLE__</title>
__SCRIPTS__
</head>
<body>
    <div id="chart" style="width:900px; height:500px;"></div>
    <script type="text/javascript">
        var chart = echarts.init(document.getElementById('chart'), 'white', {renderer: 'canvas'});
        var option = __OPTION__;
        chart.setOption(option);
    </script>
</body>
</html>
"#;


/// Builds a standalone page around an ECharts option object. `extra_scripts`
/// are loaded after ECharts itself. `title` is one of the fixed chart titles
/// and goes in unescaped.
pub(crate) fn page(title: &str, option: &Value, extra_scripts: &[&str]) -> Result<String> {
	let mut scripts = format!("    <script type=\"text/javascript\" src=\"{}\"></script>", ECHARTS_JS);
	for src in extra_scripts.iter() {
		scripts.push_str(&format!("\n    <script type=\"text/javascript\" src=\"{}\"></script>", src));
	}
	// "</" must not appear inside the inline script
	let option = serde_json::to_string(option)?.replace("</", "<\\/");
	Ok(PAGE_TEMPLATE
		.replace("__TITLE__", title)
		.replace("__SCRIPTS__", &scripts)
		.replace("__OPTION__", &option))
}


pub(crate) fn write_page<P: AsRef<Path>>(path: P, html: &str) -> Result<()> {
	fs::write(path, html)?;
	Ok(())
}
