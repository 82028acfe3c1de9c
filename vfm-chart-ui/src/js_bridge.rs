//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The choropleth renderer lives in `assets/js/geo-chart.js`, embedded at
//! compile time and evaluated as a global (no ES modules). The hosting page
//! only has to include the Google Charts loader `<script>`; everything else
//! is promoted onto `window.*` from here.

// Embed the chart JS at compile time
static GEO_CHART_JS: &str = include_str!("../assets/js/geo-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('VFM JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize the geo chart script with a wait-for-Google polling loop.
///
/// The script defines `renderGeoChart(...)` via `function` declarations. To
/// ensure they become globally accessible (not block-scoped inside the
/// setInterval callback), the script text is stashed on `window`, evaluated
/// at global scope via indirect eval once the Google loader is present, and
/// each function is then explicitly promoted to `window.*`. Finally the
/// `geochart` package load is kicked off.
pub fn init_charts() {
    let store_js = format!(
        "window.__vfmChartScripts = {};",
        serde_json::to_string(GEO_CHART_JS).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForGoogle = setInterval(function() {
                if (typeof google !== 'undefined' && google.charts) {
                    clearInterval(waitForGoogle);
                    // Eval at global scope via indirect eval
                    (0, eval)(window.__vfmChartScripts);
                    delete window.__vfmChartScripts;
                    // Promote function declarations to window explicitly
                    if (typeof renderGeoChart !== 'undefined') window.renderGeoChart = renderGeoChart;
                    if (typeof geoChartsReady !== 'undefined') window.geoChartsReady = geoChartsReady;
                    if (typeof initGeoCharts !== 'undefined') {
                        window.initGeoCharts = initGeoCharts;
                        window.initGeoCharts();
                    }
                    console.log('VFM charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Render a US-state choropleth into the given container.
///
/// Uses a polling loop to wait for the Google loader, the `geochart`
/// package, and the container DOM element before drawing.
pub fn render_geo_chart(container_id: &str, data_json: &str, options_json: &str) {
    let escaped_data = data_json.replace('\'', "\\'").replace('\n', "");
    let escaped_options = options_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (typeof window.geoChartsReady !== 'undefined' &&
                    window.geoChartsReady() &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderGeoChart('{container_id}', '{escaped_data}', '{escaped_options}');
                    }} catch(e) {{ console.error('[VFM] renderGeoChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el) el.innerHTML = '';",
        container_id
    ));
}
