use component_model::{Component, ConfigValue, GlobalConfig};
use tracing::info;

const SOURCES: [&str; 3] = ["linkkit_sample_gateway.c", "light.c", "linkkit_entry.c"];

const COMPONENT_DEPS: [&str; 4] = [
    "framework/protocol/linkkit/iotx-sdk-c",
    "framework/protocol/linkkit/hal-impl",
    "framework/netmgr",
    "framework/common",
];

const GLOBAL_MACROS: [&str; 9] = [
    "MQTT_DIRECT",
    "ALIOT_DEBUG",
    "IOTX_DEBUG",
    "USE_LPTHREAD",
    "FOTA_RAM_LIMIT_MODE",
    "COAP_WITH_YLOOP",
    "TEST_ALCS",
    "CONFIG_AOS_CLI",
    "ON_PRE2=1",
];

/// 构造 linkkit 组件描述，LWIP=1 时追加网络协议栈依赖并回写 no_with_lwip
pub fn linkkit_component(global: &mut GlobalConfig) -> Component {
    let mut component = Component::new(
        "linkkit",
        SOURCES.iter().map(|s| s.to_string()).collect(),
    );

    for dep in COMPONENT_DEPS {
        component.add_comp_dep(dep);
    }

    for macro_str in GLOBAL_MACROS {
        component.add_global_macro(macro_str);
    }

    if global.get_int("LWIP") == Some(1) {
        component.add_comp_dep("kernel/protocols/net");
        global.set("no_with_lwip", ConfigValue::Int(0));
        info!("LWIP enabled, added kernel/protocols/net");
    }

    component
}
