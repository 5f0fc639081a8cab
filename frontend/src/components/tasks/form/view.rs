//! View rendering for the task editor form.
//!
//! Everything is rendered from component state: the answers section only
//! exists while the task type is a closed one, the preview image comes from
//! the stored object URL, and the paste listener sits on the form root (the
//! smallest container that can receive a paste meant for this form) instead
//! of on `document`.

use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use common::model::catalog;
use common::model::task::{AnswerKey, TaskType, RODZAJ_ARKUSZA_OUT};

use crate::overlay::OverlaySheet;

use super::messages::Msg;
use super::state::TaskFormComponent;

pub fn view(component: &TaskFormComponent, ctx: &Context<TaskFormComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="task-form" onpaste={link.callback(Msg::Pasted)}>
            { build_metadata_row(component, link) }

            <label for="tresc">{"Treść zadania"}</label>
            <textarea
                id="tresc"
                name="tresc"
                value={component.tresc.clone()}
                oninput={link.callback(|e: InputEvent| {
                    Msg::SetTresc(e.target_unchecked_into::<HtmlTextAreaElement>().value())
                })}
            />

            { build_typ_select(component, link) }
            {
                if component.answers_visible() {
                    build_answers_section(component, link)
                } else {
                    html! {}
                }
            }

            { build_attachment_block(component, link) }

            <button class="save-btn" onclick={link.callback(|_| Msg::Zapisz)}>
                {"Zapisz zadanie"}
            </button>

            { build_preview_overlay(component, link) }
        </div>
    }
}

/// Subject, scope, topic and sheet-origin selects. The topic options follow
/// the chosen subject; year and number only show for sheet-based tasks.
fn build_metadata_row(component: &TaskFormComponent, link: &Scope<TaskFormComponent>) -> Html {
    html! {
        <div class="task-meta">
            { select_field("przedmiot", "Przedmiot", &catalog::PRZEDMIOTY, &component.przedmiot,
                link.callback(Msg::SetPrzedmiot)) }
            { select_field("zakres", "Zakres", &catalog::ZAKRESY, &component.zakres,
                link.callback(Msg::SetZakres)) }
            { select_field("dzial", "Dział", catalog::dzialy_for(&component.przedmiot),
                &component.dzial, link.callback(Msg::SetDzial)) }

            <label for="rodzaj_arkusza">{"Rodzaj arkusza"}</label>
            <select
                id="rodzaj_arkusza"
                name="rodzaj_arkusza"
                onchange={link.callback(|e: Event| {
                    Msg::SetRodzajArkusza(e.target_unchecked_into::<HtmlSelectElement>().value())
                })}
            >
                <option value="matura" selected={component.rodzaj_arkusza == "matura"}>
                    {"Arkusz maturalny"}
                </option>
                <option
                    value={RODZAJ_ARKUSZA_OUT}
                    selected={component.rodzaj_arkusza == RODZAJ_ARKUSZA_OUT}
                >
                    {"Poza arkuszem"}
                </option>
            </select>

            {
                if component.requires_sheet_origin() {
                    html! {
                        <>
                            <label for="rok_arkusza">{"Rok arkusza"}</label>
                            <input
                                id="rok_arkusza"
                                name="rok_arkusza"
                                type="number"
                                value={component.rok_arkusza.clone()}
                                oninput={link.callback(|e: InputEvent| {
                                    Msg::SetRokArkusza(
                                        e.target_unchecked_into::<HtmlInputElement>().value(),
                                    )
                                })}
                            />
                            <label for="numer_zadania">{"Numer zadania"}</label>
                            <input
                                id="numer_zadania"
                                name="numer_zadania"
                                type="number"
                                value={component.numer_zadania.clone()}
                                oninput={link.callback(|e: InputEvent| {
                                    Msg::SetNumerZadania(
                                        e.target_unchecked_into::<HtmlInputElement>().value(),
                                    )
                                })}
                            />
                        </>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn select_field(
    name: &'static str,
    label: &'static str,
    options: &[&'static str],
    current: &str,
    on_change: Callback<String>,
) -> Html {
    html! {
        <>
            <label for={name}>{label}</label>
            <select
                id={name}
                name={name}
                onchange={on_change.reform(|e: Event| {
                    e.target_unchecked_into::<HtmlSelectElement>().value()
                })}
            >
                {
                    options.iter().map(|option| html! {
                        <option value={*option} selected={current == *option}>{*option}</option>
                    }).collect::<Html>()
                }
            </select>
        </>
    }
}

fn build_typ_select(component: &TaskFormComponent, link: &Scope<TaskFormComponent>) -> Html {
    html! {
        <>
            <label for="typ_zadania">{"Typ zadania"}</label>
            <select
                id="typ_zadania"
                name="typ_zadania"
                onchange={link.callback(|e: Event| {
                    Msg::SetTypZadania(e.target_unchecked_into::<HtmlSelectElement>().value())
                })}
            >
                <option
                    value="zamkniete"
                    selected={component.typ_zadania == TaskType::Zamkniete}
                >
                    {"Zamknięte"}
                </option>
                <option value="otwarte" selected={component.typ_zadania == TaskType::Otwarte}>
                    {"Otwarte"}
                </option>
            </select>
        </>
    }
}

/// Answers A–D plus the correct-answer select. Rendered only for closed
/// tasks; switching away clears the values, so nothing survives a return
/// trip.
fn build_answers_section(component: &TaskFormComponent, link: &Scope<TaskFormComponent>) -> Html {
    html! {
        <div id="answers-section" class="answers-section">
            {
                AnswerKey::ALL.iter().enumerate().map(|(idx, key)| {
                    let name = format!("odp_{}", key.letter().to_lowercase());
                    html! {
                        <>
                            <label for={name.clone()}>{format!("Odpowiedź {}", key.letter())}</label>
                            <input
                                id={name.clone()}
                                name={name}
                                value={component.odpowiedzi[idx].clone()}
                                oninput={link.callback(move |e: InputEvent| {
                                    Msg::SetOdpowiedz(
                                        idx,
                                        e.target_unchecked_into::<HtmlInputElement>().value(),
                                    )
                                })}
                            />
                        </>
                    }
                }).collect::<Html>()
            }

            <label for="poprawna_odp">{"Poprawna odpowiedź"}</label>
            <select
                id="poprawna_odp"
                name="poprawna_odp"
                onchange={link.callback(|e: Event| {
                    Msg::SetPoprawnaOdp(e.target_unchecked_into::<HtmlSelectElement>().value())
                })}
            >
                <option value="" selected={component.poprawna_odp.is_none()}>{"—"}</option>
                {
                    AnswerKey::ALL.iter().map(|key| html! {
                        <option
                            value={key.letter()}
                            selected={component.poprawna_odp == Some(*key)}
                        >
                            {key.letter()}
                        </option>
                    }).collect::<Html>()
                }
            </select>
        </div>
    }
}

/// The attachment input and its preview thumbnail. Pasting an image
/// anywhere in the form fills both; the input also accepts a manual pick.
fn build_attachment_block(component: &TaskFormComponent, link: &Scope<TaskFormComponent>) -> Html {
    html! {
        <div class="attachment-block">
            <label for="fileInput">{"Załącznik (wklej obraz lub wybierz plik)"}</label>
            <input
                id="fileInput"
                name="zalacznik"
                type="file"
                accept="image/*"
                ref={component.file_input_ref.clone()}
                onchange={link.batch_callback(|e: Event| {
                    let input = e.target_unchecked_into::<HtmlInputElement>();
                    input
                        .files()
                        .and_then(|files| files.get(0))
                        .map(Msg::FileSelected)
                })}
            />
            <div id="preview" class="preview">
                {
                    component.preview_url.as_ref().map(|url| html! {
                        <img
                            src={url.to_string()}
                            alt="Podgląd załącznika"
                            onclick={link.callback(|_| Msg::OpenPreviewOverlay)}
                        />
                    })
                }
            </div>
        </div>
    }
}

/// Full-screen zoom for the preview thumbnail, on the overlay sheet.
fn build_preview_overlay(component: &TaskFormComponent, link: &Scope<TaskFormComponent>) -> Html {
    html! {
        <OverlaySheet node_ref={component.overlay_ref.clone()}>
            <div class="preview-overlay">
                <button
                    class="preview-overlay-close"
                    onclick={link.callback(|_| Msg::ClosePreviewOverlay)}
                >
                    {"✕"}
                </button>
                {
                    match component.preview_url.as_ref() {
                        Some(url) => html! {
                            <img src={url.to_string()} alt="Załącznik" />
                        },
                        None => html! { <span>{"Brak załącznika"}</span> },
                    }
                }
            </div>
        </OverlaySheet>
    }
}
