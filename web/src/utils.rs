use goblin_whack_core::{CellCount, CellId, GameError, Result};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, EventTarget};

pub(crate) const CELL_SELECTOR: &str = ".cell";
pub(crate) const CELL_INDEX_ATTR: &str = "data-index";

/// Helper function to use JavaScript's Math.random
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    u64::from_be_bytes([
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
    ])
}

/// Looks up the element the game renders into.
pub(crate) fn mount_root(id: &str) -> Result<Element> {
    gloo::utils::document()
        .get_element_by_id(id)
        .ok_or_else(|| GameError::Mount { id: id.into() })
}

pub(crate) fn to_js_error(err: GameError) -> JsValue {
    log::error!("{}", err);
    JsValue::from_str(&err.to_string())
}

/// Resolves a click inside the grid to the cell under it, if any.
pub(crate) fn cell_from_event_target(
    target: Option<EventTarget>,
    cell_count: CellCount,
) -> Option<CellId> {
    let element = target?.dyn_into::<Element>().ok()?;
    let cell = element.closest(CELL_SELECTOR).ok()??;
    parse_cell_index(&cell.get_attribute(CELL_INDEX_ATTR)?, cell_count)
}

pub(crate) fn parse_cell_index(raw: &str, cell_count: CellCount) -> Option<CellId> {
    let index: CellCount = raw.trim().parse().ok()?;
    (index < cell_count).then_some(CellId::new(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_in_range_indices() {
        assert_eq!(parse_cell_index("0", 16), Some(CellId::new(0)));
        assert_eq!(parse_cell_index(" 15 ", 16), Some(CellId::new(15)));
    }

    #[test]
    fn rejects_out_of_range_or_garbage() {
        assert_eq!(parse_cell_index("16", 16), None);
        assert_eq!(parse_cell_index("-1", 16), None);
        assert_eq!(parse_cell_index("goblin", 16), None);
        assert_eq!(parse_cell_index("", 16), None);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn missing_mount_is_reported() {
        assert_eq!(
            mount_root("no-such-element").unwrap_err(),
            GameError::Mount {
                id: "no-such-element".into()
            }
        );
    }

    #[wasm_bindgen_test]
    fn click_on_goblin_image_resolves_to_its_cell() {
        let document = gloo::utils::document();
        let cell = document.create_element("div").unwrap();
        cell.set_class_name("cell");
        cell.set_attribute(CELL_INDEX_ATTR, "5").unwrap();
        let goblin = document.create_element("img").unwrap();
        cell.append_child(&goblin).unwrap();
        gloo::utils::body().append_child(&cell).unwrap();

        let target: EventTarget = goblin.into();
        assert_eq!(cell_from_event_target(Some(target), 16), Some(CellId::new(5)));

        let outside: EventTarget = gloo::utils::body().into();
        assert_eq!(cell_from_event_target(Some(outside), 16), None);
        cell.remove();
    }
}
