use super::{Input, Select, Textarea};
use contracts::shared::form::{FormField, FormModel, InputKind};
use leptos::prelude::*;

/// Renders one field of a typed form bound to `form`.
///
/// Label, `required` marker, placeholder and input type all come from the
/// field metadata. `options` is only used by select fields.
pub fn form_field<M>(
    form: RwSignal<M>,
    field: M::Field,
    options: Vec<(String, String)>,
) -> AnyView
where
    M: FormModel + Send + Sync + 'static,
    M::Field: Send + Sync,
{
    let value = Signal::derive(move || form.with(|f| f.get(field).to_string()));
    let on_input = Callback::new(move |v: String| form.update(|f| f.set(field, v)));
    let id = field.id();
    let label = field.display_label();
    let placeholder = field.placeholder();
    let required = field.is_required();

    match field.kind() {
        InputKind::TextArea => view! {
            <Textarea
                id=id
                label=label
                value=value
                on_input=on_input
                placeholder=placeholder
                required=required
            />
        }
        .into_any(),
        InputKind::Select => view! {
            <Select
                id=id
                label=label
                value=value
                on_change=on_input
                options=options
                placeholder=placeholder
                required=required
            />
        }
        .into_any(),
        kind => view! {
            <Input
                id=id
                label=label
                value=value
                on_input=on_input
                kind=kind
                placeholder=placeholder
                required=required
            />
        }
        .into_any(),
    }
}
