//! Update function for the task editor form.
//!
//! Elm-style: receives the state, the `Context`, and a `Msg`, mutates the
//! state, and returns whether the view should re-render. Field edits are
//! plain state writes; the paste path extracts the image, mirrors it into
//! the attachment input's file list, and swaps the preview object URL
//! (revoking the previous one); saving validates the draft and either emits
//! it to the parent or surfaces the validation message as a toast.

use gloo_file::ObjectUrl;
use yew::prelude::*;

use common::model::task::{AnswerKey, TaskType};

use crate::overlay::{close_overlay, open_overlay};

use super::helpers::{extract_pasted_image, show_toast, sync_file_input};
use super::messages::Msg;
use super::state::TaskFormComponent;

pub fn update(
    component: &mut TaskFormComponent,
    ctx: &Context<TaskFormComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::SetPrzedmiot(przedmiot) => {
            component.set_przedmiot(przedmiot);
            true
        }
        Msg::SetZakres(zakres) => {
            component.zakres = zakres;
            true
        }
        Msg::SetDzial(dzial) => {
            component.dzial = dzial;
            true
        }
        Msg::SetRodzajArkusza(rodzaj) => {
            component.rodzaj_arkusza = rodzaj;
            true
        }
        Msg::SetRokArkusza(rok) => {
            component.rok_arkusza = rok;
            true
        }
        Msg::SetNumerZadania(numer) => {
            component.numer_zadania = numer;
            true
        }
        Msg::SetTypZadania(value) => {
            component.set_typ_zadania(TaskType::from_select_value(&value));
            true
        }
        Msg::SetTresc(tresc) => {
            component.tresc = tresc;
            true
        }
        Msg::SetOdpowiedz(idx, value) => {
            if let Some(slot) = component.odpowiedzi.get_mut(idx) {
                *slot = value;
            }
            true
        }
        Msg::SetPoprawnaOdp(letter) => {
            component.poprawna_odp = AnswerKey::from_letter(&letter);
            true
        }
        Msg::Pasted(event) => {
            let Some(file) = extract_pasted_image(&event) else {
                // Text or other non-image content; not ours to handle.
                return false;
            };
            sync_file_input(&component.file_input_ref, &file);
            // Replacing the option drops the previous ObjectUrl, which
            // revokes the old URL before the new preview takes over.
            component.preview_url = Some(ObjectUrl::from(gloo_file::File::from(file)));
            show_toast("Wklejono obraz ze schowka.");
            true
        }
        Msg::FileSelected(file) => {
            component.preview_url = Some(ObjectUrl::from(gloo_file::File::from(file)));
            true
        }
        Msg::OpenPreviewOverlay => {
            open_overlay(component.overlay_ref.clone());
            false
        }
        Msg::ClosePreviewOverlay => {
            close_overlay(component.overlay_ref.clone());
            false
        }
        Msg::Zapisz => {
            let task = component.to_task();
            match task.validate() {
                Ok(()) => {
                    show_toast("Zapisano zadanie.");
                    ctx.props().on_saved.emit(task);
                }
                Err(err) => show_toast(&err.to_string()),
            }
            false
        }
    }
}
