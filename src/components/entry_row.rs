use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct EntryRowProps {
    pub entry_key: String,
    pub index: usize,
    #[prop_or(false)]
    pub is_selected: bool,
    pub on_select: Callback<String>,
}

#[function_component(EntryRow)]
pub fn entry_row(props: &EntryRowProps) -> Html {
    let row_classes = classes!("entry-row", props.is_selected.then_some("selected"));

    let on_click = {
        let cb = props.on_select.clone();
        let key = props.entry_key.clone();
        Callback::from(move |_: MouseEvent| emit_selection(&cb, &key))
    };

    html! {
        <div
            class={row_classes}
            onclick={on_click}
            title={props.entry_key.clone()}
            data-index={props.index.to_string()}
        >
            <span class="entry-icon">{"🔑"}</span>
            <span class="entry-key">{props.entry_key.clone()}</span>
        </div>
    }
}

/// Un click = una emisión con la clave de la fila
fn emit_selection(on_select: &Callback<String>, key: &str) {
    on_select.emit(key.to_string());
}
