use crate::events::AppEvent;
use crate::gui::theme::SliderColors;
use crate::gui::view;
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use slider_core::config;
use slider_core::{CircleSlider, Point, PointerAction};
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

pub struct AppModel {
    pub slider: Rc<RefCell<CircleSlider>>,
    pub colors: Rc<RefCell<SliderColors>>,
    pub config_path: PathBuf,
    pub drawing_area: gtk::DrawingArea,
}

#[derive(Debug)]
pub enum AppMsg {
    Pointer(PointerAction, Point),
    ConfigReload,
    Quit,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (
        CircleSlider,
        SliderColors,
        PathBuf,
        async_channel::Receiver<AppEvent>,
    );
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Circle Slider"),
            set_resizable: false,

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    if key == gtk::gdk::Key::Escape {
                        sender.input(AppMsg::Quit);
                        return glib::Propagation::Stop;
                    }
                    glib::Propagation::Proceed
                }
            },

            #[name = "drawing_area"]
            gtk::DrawingArea {
                set_content_width: size,
                set_content_height: size,
                set_hexpand: false,
                set_vexpand: false,

                add_controller = gtk::GestureDrag {
                    connect_drag_begin[sender] => move |gesture, x, y| {
                        // the slider claims every pointer sequence it sees
                        gesture.set_state(gtk::EventSequenceState::Claimed);
                        sender.input(AppMsg::Pointer(PointerAction::Down, Point::new(x, y)));
                    },
                    connect_drag_update[sender] => move |gesture, dx, dy| {
                        if let Some((x, y)) = gesture.start_point() {
                            sender.input(AppMsg::Pointer(
                                PointerAction::Move,
                                Point::new(x + dx, y + dy),
                            ));
                        }
                    },
                    connect_drag_end[sender] => move |gesture, dx, dy| {
                        let (x, y) = gesture.start_point().unwrap_or_default();
                        sender.input(AppMsg::Pointer(PointerAction::Up, Point::new(x + dx, y + dy)));
                    },
                    connect_cancel[sender] => move |_, _| {
                        sender.input(AppMsg::Pointer(PointerAction::Cancel, Point::default()));
                    }
                }
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (slider, colors, config_path, rx) = init;
        let size = slider.measured_size().ceil() as i32;

        let model = AppModel {
            slider: Rc::new(RefCell::new(slider)),
            colors: Rc::new(RefCell::new(colors)),
            config_path,
            drawing_area: gtk::DrawingArea::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();

        let slider_draw = model.slider.clone();
        let colors_draw = model.colors.clone();
        widgets.drawing_area.set_draw_func(move |_, cr, _, _| {
            let frame = slider_draw.borrow().frame();
            if let Err(e) = view::draw(cr, &frame, &colors_draw.borrow()) {
                log::error!("Drawing error: {}", e);
            }
        });

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Pointer(action, point) => {
                let response = self.slider.borrow_mut().handle_pointer(action, point);
                if response.should_redraw {
                    self.drawing_area.queue_draw();
                }
            }
            AppMsg::ConfigReload => self.reload(),
            AppMsg::Quit => relm4::main_application().quit(),
        }
    }
}

impl AppModel {
    /// Rebuilds the slider from the config file. The thumb starts over at 0;
    /// a broken file keeps the current slider.
    fn reload(&mut self) {
        let loaded = config::load_config_from(&self.config_path)
            .and_then(|c| c.geometry().map(|geometry| (c, geometry)));

        match loaded {
            Ok((new_config, geometry)) => {
                let slider = CircleSlider::new(geometry);
                let size = slider.measured_size().ceil() as i32;

                *self.slider.borrow_mut() = slider;
                *self.colors.borrow_mut() = SliderColors::from(&new_config.colors);
                self.drawing_area.set_content_width(size);
                self.drawing_area.set_content_height(size);
                self.drawing_area.queue_draw();
                log::info!("Configuration reloaded");
            }
            Err(e) => log::error!("Failed to reload config: {}", e),
        }
    }
}
