//! Browser-side downloads: the rendered table as TSV.

use common::export::tsv_filename;

/// Cells carrying this attribute are left out of the TSV.
pub const NO_EXPORT_ATTR: &str = "data-no-export";

/// Today as `YYYY-MM-DD`, in the browser's time zone.
#[cfg(target_arch = "wasm32")]
pub fn today() -> String {
    let now = js_sys::Date::new_0();
    format!("{:04}-{:02}-{:02}", now.get_full_year(), now.get_month() + 1, now.get_date())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn today() -> String {
    String::new()
}

#[cfg(target_arch = "wasm32")]
fn js_err(e: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow::anyhow!("{e:?}")
}

/// Reads the text of every cell of the table with DOM id `table_id`.
#[cfg(target_arch = "wasm32")]
fn read_dom_table(document: &web_sys::Document, table_id: &str) -> anyhow::Result<Vec<Vec<String>>> {
    use anyhow::Context;
    use wasm_bindgen::JsCast;

    let table: web_sys::HtmlTableElement = document
        .get_element_by_id(table_id)
        .with_context(|| format!("table #{table_id} is not rendered"))?
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("#{table_id} is not a table"))?;
    let rows = table.rows();
    let mut out = Vec::with_capacity(rows.length() as usize);
    for i in 0..rows.length() {
        let Some(row) = rows.item(i) else { continue };
        let Ok(row) = row.dyn_into::<web_sys::HtmlTableRowElement>() else { continue };
        let cells = row.cells();
        let mut values = Vec::with_capacity(cells.length() as usize);
        for j in 0..cells.length() {
            let Some(cell) = cells.item(j) else { continue };
            if cell.get_attribute(NO_EXPORT_ATTR).is_some() {
                continue;
            }
            let Ok(cell) = cell.dyn_into::<web_sys::HtmlElement>() else { continue };
            values.push(cell.inner_text());
        }
        out.push(values);
    }
    Ok(out)
}

#[cfg(target_arch = "wasm32")]
fn save_text_file(document: &web_sys::Document, text: &str, filename: &str, mime: &str) -> anyhow::Result<()> {
    use wasm_bindgen::JsCast;

    let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(text));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js_err)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;
    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("could not create a link"))?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();
    web_sys::Url::revoke_object_url(&url).map_err(js_err)?;
    Ok(())
}

/// Downloads the table with DOM id `table_id` as `{table_id}.{date}.tsv`.
/// Returns the file name.
#[cfg(target_arch = "wasm32")]
pub fn download_table_tsv(table_id: &str) -> anyhow::Result<String> {
    use anyhow::Context;
    use common::export::rows_to_tsv;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .context("no document")?;
    let rows = read_dom_table(&document, table_id)?;
    let filename = tsv_filename(table_id, &today());
    save_text_file(&document, &rows_to_tsv(&rows), &filename, "text/tab-separated-values")?;
    Ok(filename)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn download_table_tsv(table_id: &str) -> anyhow::Result<String> {
    anyhow::bail!("cannot export #{table_id} to {}: no browser", tsv_filename(table_id, &today()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_needs_a_browser() {
        let err = download_table_tsv("explore-case-table").unwrap_err();
        assert!(err.to_string().contains("explore-case-table"));
    }
}
