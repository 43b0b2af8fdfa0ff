use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub title: AttrValue,
    pub on_close: Callback<()>,
    pub children: Children,
}

/// Shared dialog shell: dimmed overlay, titled card, close button. Whether
/// it renders at all is decided by the caller matching on the active modal.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal-overlay">
            <div class="modal-card">
                <div class="modal-header">
                    <h3>{props.title.clone()}</h3>
                    <button class="icon-btn" onclick={on_close}>{"✕"}</button>
                </div>
                <div class="modal-body">
                    {for props.children.iter()}
                </div>
            </div>
        </div>
    }
}
