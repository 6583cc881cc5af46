//! SH7055 on-chip vector and peripheral register maps.

use indexmap::IndexMap;

use crate::processor::MapEntry;

lazy_static! {
    pub static ref VECTORS: IndexMap<u32, MapEntry> = collect(VECTOR_DEFS);
    pub static ref REGISTERS: IndexMap<u32, MapEntry> = collect(REGISTER_DEFS);
}

fn collect(defs: &[(u32, &'static str, u32, &'static str)]) -> IndexMap<u32, MapEntry> {
    defs.iter()
        .map(|&(addr, name, size, comment)| (addr, MapEntry { name, size, comment }))
        .collect()
}

#[rustfmt::skip]
const VECTOR_DEFS: &[(u32, &str, u32, &str)] = &[
    (0x00000000, "v_power_on_pc", 4, "Power-on reset (PC)"),
    (0x00000004, "v_power_on_sp", 4, "Power-on reset (SP)"),
    (0x00000008, "v_reset_pc", 4, "Manual reset (PC)"),
    (0x0000000C, "v_reset_sp", 4, "Manual reset (SP)"),
    (0x00000010, "v_gen_ill_inst", 4, "General illegal instruction"),
    (0x00000018, "v_slot_ill_inst", 4, "Slot illegal instruction"),
    (0x00000024, "v_cpu_addr_err", 4, "CPU address error"),
    (0x00000028, "v_dmac_addr_err", 4, "DMAC address error"),
    (0x0000002C, "v_int_nmi", 4, "NMI interrupt"),
    (0x00000030, "v_int_ubc", 4, "User break interrupt"),
    (0x00000034, "v_fpu_exception", 4, "FPU Exception"),
    (0x00000038, "v_h_udi", 4, "H-UDI"),
    (0x00000100, "v_int_irq0", 4, "IRQ0 interrupt"),
    (0x00000104, "v_int_irq1", 4, "IRQ1 interrupt"),
    (0x00000108, "v_int_irq2", 4, "IRQ2 interrupt"),
    (0x0000010C, "v_int_irq3", 4, "IRQ3 interrupt"),
    (0x00000110, "v_int_irq4", 4, "IRC4 interrupt"),
    (0x00000114, "v_int_irq5", 4, "IRC5 interrupt"),
    (0x00000118, "v_int_irq6", 4, "IRC6 interrupt"),
    (0x0000011C, "v_int_irq7", 4, "IRC7 interrupt"),
    (0x00000120, "v_dmac0_dei0", 4, "Direct memory access controller 0 interrupt"),
    (0x00000128, "v_dmac1_dei1", 4, "Direct memory access controller 1 interrupt"),
    (0x00000130, "v_dmac2_dei2", 4, "Direct memory access controller 2 interrupt"),
    (0x00000138, "v_dmac3_dei3", 4, "Direct memory access controller 3 interrupt"),
    (0x00000140, "v_atu01_itv", 4, "Advanced timer unit channel 0 interval interrupt"),
    (0x00000150, "v_atu02_ici0A", 4, "Advanced timer unit channel 0 input capture interrupt A"),
    (0x00000158, "v_atu02_ici0B", 4, "Advanced timer unit channel 0 input capture interrupt B"),
    (0x00000160, "v_atu03_ici0C", 4, "Advanced timer unit channel 0 input capture interrupt C"),
    (0x00000168, "v_atu03_ici0D", 4, "Advanced timer unit channel 0 input capture interrupt D"),
    (0x00000170, "v_atu04_ovi0", 4, "Advanced timer unit channel 0 overflow interrupt"),
    (0x00000180, "v_atu11_imi1A", 4, "Advanced timer unit channel 1 input capture/compare-match interrupt A"),
    (0x00000184, "v_atu11_imi1B", 4, "Advanced timer unit channel 1 input capture/compare-match interrupt B"),
    (0x00000188, "v_atu11_imi1C", 4, "Advanced timer unit channel 1 input capture/compare-match interrupt C"),
    (0x0000018C, "v_atu11_imi1D", 4, "Advanced timer unit channel 1 input capture/compare-match interrupt D"),
    (0x00000190, "v_atu12_imi1E", 4, "Advanced timer unit channel 1 input capture/compare-match interrupt E"),
    (0x00000194, "v_atu12_imi1F", 4, "Advanced timer unit channel 1 input capture/compare-match interrupt F"),
    (0x00000198, "v_atu12_imi1G", 4, "Advanced timer unit channel 1 input capture/compare-match interrupt G"),
    (0x0000019C, "v_atu12_imi1H", 4, "Advanced timer unit channel 1 input capture/compare-match interrupt H"),
    (0x000001A0, "v_atu13_ovi1AB", 4, "Advanced timer unit channel 1 counter overflow interrupt A/B"),
    (0x000001B0, "v_atu21_imi2A", 4, "Advanced timer unit channel 2 input capture/compare-match interrupt A"),
    (0x000001B4, "v_atu21_imi2B", 4, "Advanced timer unit channel 2 input capture/compare-match interrupt B"),
    (0x000001B8, "v_atu21_imi2C", 4, "Advanced timer unit channel 2 input capture/compare-match interrupt C"),
    (0x000001BC, "v_atu21_imi2D", 4, "Advanced timer unit channel 2 input capture/compare-match interrupt D"),
    (0x000001C0, "v_atu22_imi2E", 4, "Advanced timer unit channel 2 input capture/compare-match interrupt E"),
    (0x000001C4, "v_atu22_imi2F", 4, "Advanced timer unit channel 2 input capture/compare-match interrupt F"),
    (0x000001C8, "v_atu22_imi2G", 4, "Advanced timer unit channel 2 input capture/compare-match interrupt G"),
    (0x000001CC, "v_atu22_imi2H", 4, "Advanced timer unit channel 2 input capture/compare-match interrupt H"),
    (0x000001D0, "v_atu23_ovi2AB", 4, "Advanced timer unit channel 2 counter overflow interrupt A/B"),
    (0x000001E0, "v_atu31_imi3A", 4, "Advanced timer unit channel 3 input capture/compare-match interrupt A"),
    (0x000001E4, "v_atu31_imi3B", 4, "Advanced timer unit channel 3 input capture/compare-match interrupt B"),
    (0x000001E8, "v_atu31_imi3C", 4, "Advanced timer unit channel 3 input capture/compare-match interrupt C"),
    (0x000001EC, "v_atu31_imi3D", 4, "Advanced timer unit channel 3 input capture/compare-match interrupt D"),
    (0x000001F0, "v_atu32_ovi3", 4, "Advanced timer unit channel 3 counter overflow interrupt"),
    (0x00000200, "v_atu41_imi4A", 4, "Advanced timer unit channel 4 input capture/compare-match interrupt A"),
    (0x00000204, "v_atu41_imi4B", 4, "Advanced timer unit channel 4 input capture/compare-match interrupt B"),
    (0x00000208, "v_atu41_imi4C", 4, "Advanced timer unit channel 4 input capture/compare-match interrupt C"),
    (0x0000020C, "v_atu41_imi4D", 4, "Advanced timer unit channel 4 input capture/compare-match interrupt D"),
    (0x00000210, "v_atu42_ovi4", 4, "Advanced timer unit channel 4 counter overflow interrupt"),
    (0x00000220, "v_atu51_imi5A", 4, "Advanced timer unit channel 5 input capture/compare-match interrupt A"),
    (0x00000224, "v_atu51_imi5B", 4, "Advanced timer unit channel 5 input capture/compare-match interrupt B"),
    (0x00000228, "v_atu51_imi5C", 4, "Advanced timer unit channel 5 input capture/compare-match interrupt C"),
    (0x0000022C, "v_atu51_imi5D", 4, "Advanced timer unit channel 5 input capture/compare-match interrupt D"),
    (0x00000230, "v_atu52_ovi5", 4, "Advanced timer unit channel 5 counter overflow interrupt"),
    (0x00000240, "v_atu6_cmi6A", 4, "Advanced timer unit channel 6 compare-match interrupt A"),
    (0x00000244, "v_atu6_cmi6B", 4, "Advanced timer unit channel 6 compare-match interrupt B"),
    (0x00000248, "v_atu6_cmi6C", 4, "Advanced timer unit channel 6 compare-match interrupt C"),
    (0x0000024C, "v_atu6_cmi6D", 4, "Advanced timer unit channel 6 compare-match interrupt D"),
    (0x00000250, "v_atu7_cmi7A", 4, "Advanced timer unit channel 7 compare-match interrupt A"),
    (0x00000254, "v_atu7_cmi7B", 4, "Advanced timer unit channel 7 compare-match interrupt B"),
    (0x00000258, "v_atu7_cmi7C", 4, "Advanced timer unit channel 7 compare-match interrupt C"),
    (0x0000025C, "v_atu7_cmi7D", 4, "Advanced timer unit channel 7 compare-match interrupt D"),
    (0x00000260, "v_atu81_osi8A", 4, "Advanced timer unit channel 8 one-shot end interrupt A"),
    (0x00000264, "v_atu81_osi8B", 4, "Advanced timer unit channel 8 one-shot end interrupt B"),
    (0x00000268, "v_atu81_osi8C", 4, "Advanced timer unit channel 8 one-shot end interrupt C"),
    (0x0000026C, "v_atu81_osi8D", 4, "Advanced timer unit channel 8 one-shot end interrupt D"),
    (0x00000270, "v_atu82_osi8E", 4, "Advanced timer unit channel 8 one-shot end interrupt E"),
    (0x00000274, "v_atu82_osi8F", 4, "Advanced timer unit channel 8 one-shot end interrupt F"),
    (0x00000278, "v_atu82_osi8G", 4, "Advanced timer unit channel 8 one-shot end interrupt G"),
    (0x0000027C, "v_atu82_osi8H", 4, "Advanced timer unit channel 8 one-shot end interrupt H"),
    (0x00000280, "v_atu83_osi8I", 4, "Advanced timer unit channel 8 one-shot end interrupt I"),
    (0x00000284, "v_atu83_osi8J", 4, "Advanced timer unit channel 8 one-shot end interrupt J"),
    (0x00000288, "v_atu83_osi8K", 4, "Advanced timer unit channel 8 one-shot end interrupt K"),
    (0x0000028C, "v_atu83_osi8L", 4, "Advanced timer unit channel 8 one-shot end interrupt L"),
    (0x00000290, "v_atu84_osi8M", 4, "Advanced timer unit channel 8 one-shot end interrupt M"),
    (0x00000294, "v_atu84_osi8N", 4, "Advanced timer unit channel 8 one-shot end interrupt N"),
    (0x00000298, "v_atu84_osi8O", 4, "Advanced timer unit channel 8 one-shot end interrupt O"),
    (0x0000029C, "v_atu84_osi8P", 4, "Advanced timer unit channel 8 one-shot end interrupt P"),
    (0x000002A0, "v_atu91_cmi9A", 4, "Advanced timer unit channel 9 compare-match interrupt A"),
    (0x000002A4, "v_atu91_cmi9B", 4, "Advanced timer unit channel 9 compare-match interrupt B"),
    (0x000002A8, "v_atu91_cmi9C", 4, "Advanced timer unit channel 9 compare-match interrupt C"),
    (0x000002AC, "v_atu91_cmi9D", 4, "Advanced timer unit channel 9 compare-match interrupt D"),
    (0x000002B0, "v_atu92_cmi9E", 4, "Advanced timer unit channel 9 compare-match interrupt E"),
    (0x000002B8, "v_atu92_cmi9F", 4, "Advanced timer unit channel 9 compare-match interrupt F"),
    (0x000002C0, "v_atu101_cmi10A", 4, "Advanced timer unit channel 10 compare-match interrupt A"),
    (0x000002C8, "v_atu101_cmi10B", 4, "Advanced timer unit channel 10 compare-match interrupt B"),
    (0x000002D0, "v_atu102_ici10A", 4, "Advanced timer unit channel 10 compare-match interrupt C"),
    (0x000002E0, "v_atu11_imi11A", 4, "Advanced timer unit channel 11 input capture/compare-match interrupt A"),
    (0x000002E8, "v_atu11_imi11B", 4, "Advanced timer unit channel 11 input capture/compare-match interrupt B"),
    (0x000002EC, "v_atu11_ovi11", 4, "Advanced timer unit channel 11 overflow interrupt"),
    (0x000002F0, "v_cmti0", 4, "Compare match timer 0 interrupt"),
    (0x000002F8, "v_adi0", 4, "A/D converter 0 interrupt"),
    (0x00000300, "v_cmti1", 4, "Compare match timer 1 interrupt"),
    (0x00000308, "v_adi1", 4, "A/D converter 1 interrupt"),
    (0x00000310, "v_adi2", 4, "A/D converter 2 interrupt"),
    (0x00000320, "v_sci0_eri0", 4, "Serial communication interface 0 receive-error interrupt"),
    (0x00000324, "v_sci0_rxi0", 4, "Serial communication interface 0 receive-data-full interrupt"),
    (0x00000328, "v_sci0_txi0", 4, "Serial communication interface 0 transmit-data-empty interrupt"),
    (0x0000032C, "v_sci0_tei0", 4, "Serial communication interface 0 transmit-end interrupt"),
    (0x00000330, "v_sci1_eri1", 4, "Serial communication interface 1 receive-error interrupt"),
    (0x00000334, "v_sci1_rxi1", 4, "Serial communication interface 1 receive-data-full interrupt"),
    (0x00000338, "v_sci1_txi1", 4, "Serial communication interface 1 transmit-data-empty interrupt"),
    (0x0000033C, "v_sci1_tei1", 4, "Serial communication interface 1 transmit-end interrupt"),
    (0x00000340, "v_sci2_eri2", 4, "Serial communication interface 2 receive-error interrupt"),
    (0x00000344, "v_sci2_rxi2", 4, "Serial communication interface 2 receive-data-full interrupt"),
    (0x00000348, "v_sci2_txi2", 4, "Serial communication interface 2 transmit-data-empty interrupt"),
    (0x0000034C, "v_sci2_tei2", 4, "Serial communication interface 2 transmit-end interrupt"),
    (0x00000350, "v_sci3_eri3", 4, "Serial communication interface 3 receive-error interrupt"),
    (0x00000354, "v_sci3_rxi3", 4, "Serial communication interface 3 receive-data-full interrupt"),
    (0x00000358, "v_sci3_txi3", 4, "Serial communication interface 3 transmit-data-empty interrupt"),
    (0x0000035C, "v_sci3_tei3", 4, "Serial communication interface 3 transmit-end interrupt"),
    (0x00000360, "v_sci4_eri4", 4, "Serial communication interface 4 receive-error interrupt"),
    (0x00000364, "v_sci4_rxi4", 4, "Serial communication interface 4 receive-data-full interrupt"),
    (0x00000368, "v_sci4_txi4", 4, "Serial communication interface 4 transmit-data-empty interrupt"),
    (0x0000036C, "v_sci4_tei4", 4, "Serial communication interface 4 transmit-end interrupt"),
    (0x00000370, "v_hcan0_ers", 4, "Error passive interrupt request"),
    (0x00000374, "v_hcan0_ovr", 4, "Receive overload warning interrupt"),
    (0x00000378, "v_hcan0_rm", 4, "Receive message interrupt"),
    (0x0000037C, "v_hcan0_sle", 4, "Mailbox empty interrupt"),
    (0x00000380, "v_wdt_iti", 4, "Watchdog timer interval timer interrupt"),
    (0x00000390, "v_hcan1_ers", 4, "Error passive interrupt request"),
    (0x00000394, "v_hcan1_ovr", 4, "Receive overload warning interrupt"),
    (0x00000398, "v_hcan1_rm", 4, "Receive message interrupt"),
    (0x0000039C, "v_hcan1_sle", 4, "Mailbox empty interrupt"),
];

#[rustfmt::skip]
const REGISTER_DEFS: &[(u32, &str, u32, &str)] = &[
    (0xFFFFE400, "HCAN0_MCR", 1, "HCAN0 Master control register"),
    (0xFFFFE401, "HCAN0_GSR", 1, "HCAN0 General status register"),
    (0xFFFFE402, "HCAN0_BCR", 2, "HCAN0 Bit configuration register"),
    (0xFFFFE404, "HCAN0_MBCR", 2, "HCAN0 Mailbox configuration register"),
    (0xFFFFE406, "HCAN0_TXPR", 2, "HCAN0 Transmit wait register"),
    (0xFFFFE408, "HCAN0_TXCR", 2, "HCAN0 Transmit wait cancel register"),
    (0xFFFFE40A, "HCAN0_TXACK", 2, "HCAN0 Transmit acknowledge register"),
    (0xFFFFE40C, "HCAN0_ABACK", 2, "HCAN0 Abort acknowledge register"),
    (0xFFFFE40E, "HCAN0_RXPR", 2, "HCAN0 Receive complete register"),
    (0xFFFFE410, "HCAN0_RFPR", 2, "HCAN0 Remote request register"),
    (0xFFFFE412, "HCAN0_IRR", 2, "HCAN0 Interrupt register"),
    (0xFFFFE414, "HCAN0_MBIMR", 2, "HCAN0 Mailbox interrupt mask register"),
    (0xFFFFE416, "HCAN0_IMR", 2, "HCAN0 Interrupt mask register"),
    (0xFFFFE418, "HCAN0_REC", 1, "HCAN0 Receive error counter"),
    (0xFFFFE419, "HCAN0_TEC", 1, "HCAN0 Transmit error counter"),
    (0xFFFFE41A, "HCAN0_UMSR", 2, "HCAN0 Unread message status register"),
    (0xFFFFE41C, "HCAN0_LAFML", 2, "HCAN0 Local acceptance filter mask L"),
    (0xFFFFE41E, "HCAN0_LAFMH", 2, "HCAN0 Local acceptance filter mask H"),
    (0xFFFFE420, "HCAN0_MC0_1", 1, "HCAN0 Message control 0 1"),
    (0xFFFFE421, "HCAN0_MC0_2", 1, "HCAN0 Message control 0 2"),
    (0xFFFFE422, "HCAN0_MC0_3", 1, "HCAN0 Message control 0 3"),
    (0xFFFFE423, "HCAN0_MC0_4", 1, "HCAN0 Message control 0 4"),
    (0xFFFFE424, "HCAN0_MC0_5", 1, "HCAN0 Message control 0 5"),
    (0xFFFFE425, "HCAN0_MC0_6", 1, "HCAN0 Message control 0 6"),
    (0xFFFFE426, "HCAN0_MC0_7", 1, "HCAN0 Message control 0 7"),
    (0xFFFFE427, "HCAN0_MC0_8", 1, "HCAN0 Message control 0 8"),
    (0xFFFFE428, "HCAN0_MC1_1", 1, "HCAN0 Message control 1 1"),
    (0xFFFFE429, "HCAN0_MC1_2", 1, "HCAN0 Message control 1 2"),
    (0xFFFFE42A, "HCAN0_MC1_3", 1, "HCAN0 Message control 1 3"),
    (0xFFFFE42B, "HCAN0_MC1_4", 1, "HCAN0 Message control 1 4"),
    (0xFFFFE42C, "HCAN0_MC1_5", 1, "HCAN0 Message control 1 5"),
    (0xFFFFE42D, "HCAN0_MC1_6", 1, "HCAN0 Message control 1 6"),
    (0xFFFFE42E, "HCAN0_MC1_7", 1, "HCAN0 Message control 1 7"),
    (0xFFFFE42F, "HCAN0_MC1_8", 1, "HCAN0 Message control 1 8"),
    (0xFFFFE430, "HCAN0_MC2_1", 1, "HCAN0 Message control 2 1"),
    (0xFFFFE431, "HCAN0_MC2_2", 1, "HCAN0 Message control 2 2"),
    (0xFFFFE432, "HCAN0_MC2_3", 1, "HCAN0 Message control 2 3"),
    (0xFFFFE433, "HCAN0_MC2_4", 1, "HCAN0 Message control 2 4"),
    (0xFFFFE434, "HCAN0_MC2_5", 1, "HCAN0 Message control 2 5"),
    (0xFFFFE435, "HCAN0_MC2_6", 1, "HCAN0 Message control 2 6"),
    (0xFFFFE436, "HCAN0_MC2_7", 1, "HCAN0 Message control 2 7"),
    (0xFFFFE437, "HCAN0_MC2_8", 1, "HCAN0 Message control 2 8"),
    (0xFFFFE438, "HCAN0_MC3_1", 1, "HCAN0 Message control 3 1"),
    (0xFFFFE439, "HCAN0_MC3_2", 1, "HCAN0 Message control 3 2"),
    (0xFFFFE43A, "HCAN0_MC3_3", 1, "HCAN0 Message control 3 3"),
    (0xFFFFE43B, "HCAN0_MC3_4", 1, "HCAN0 Message control 3 4"),
    (0xFFFFE43C, "HCAN0_MC3_5", 1, "HCAN0 Message control 3 5"),
    (0xFFFFE43D, "HCAN0_MC3_6", 1, "HCAN0 Message control 3 6"),
    (0xFFFFE43E, "HCAN0_MC3_7", 1, "HCAN0 Message control 3 7"),
    (0xFFFFE43F, "HCAN0_MC3_8", 1, "HCAN0 Message control 3 8"),
    (0xFFFFE440, "HCAN0_MC4_1", 1, "HCAN0 Message control 4 1"),
    (0xFFFFE441, "HCAN0_MC4_2", 1, "HCAN0 Message control 4 2"),
    (0xFFFFE442, "HCAN0_MC4_3", 1, "HCAN0 Message control 4 3"),
    (0xFFFFE443, "HCAN0_MC4_4", 1, "HCAN0 Message control 4 4"),
    (0xFFFFE444, "HCAN0_MC4_5", 1, "HCAN0 Message control 4 5"),
    (0xFFFFE445, "HCAN0_MC4_6", 1, "HCAN0 Message control 4 6"),
    (0xFFFFE446, "HCAN0_MC4_7", 1, "HCAN0 Message control 4 7"),
    (0xFFFFE447, "HCAN0_MC4_8", 1, "HCAN0 Message control 4 8"),
    (0xFFFFE448, "HCAN0_MC5_1", 1, "HCAN0 Message control 5 1"),
    (0xFFFFE449, "HCAN0_MC5_2", 1, "HCAN0 Message control 5 2"),
    (0xFFFFE44A, "HCAN0_MC5_3", 1, "HCAN0 Message control 5 3"),
    (0xFFFFE44B, "HCAN0_MC5_4", 1, "HCAN0 Message control 5 4"),
    (0xFFFFE44C, "HCAN0_MC5_5", 1, "HCAN0 Message control 5 5"),
    (0xFFFFE44D, "HCAN0_MC5_6", 1, "HCAN0 Message control 5 6"),
    (0xFFFFE44E, "HCAN0_MC5_7", 1, "HCAN0 Message control 5 7"),
    (0xFFFFE44F, "HCAN0_MC5_8", 1, "HCAN0 Message control 5 8"),
    (0xFFFFE450, "HCAN0_MC6_1", 1, "HCAN0 Message control 6 1"),
    (0xFFFFE451, "HCAN0_MC6_2", 1, "HCAN0 Message control 6 2"),
    (0xFFFFE452, "HCAN0_MC6_3", 1, "HCAN0 Message control 6 3"),
    (0xFFFFE453, "HCAN0_MC6_4", 1, "HCAN0 Message control 6 4"),
    (0xFFFFE454, "HCAN0_MC6_5", 1, "HCAN0 Message control 6 5"),
    (0xFFFFE455, "HCAN0_MC6_6", 1, "HCAN0 Message control 6 6"),
    (0xFFFFE456, "HCAN0_MC6_7", 1, "HCAN0 Message control 6 7"),
    (0xFFFFE457, "HCAN0_MC6_8", 1, "HCAN0 Message control 6 8"),
    (0xFFFFE458, "HCAN0_MC7_1", 1, "HCAN0 Message control 7 1"),
    (0xFFFFE459, "HCAN0_MC7_2", 1, "HCAN0 Message control 7 2"),
    (0xFFFFE45A, "HCAN0_MC7_3", 1, "HCAN0 Message control 7 3"),
    (0xFFFFE45B, "HCAN0_MC7_4", 1, "HCAN0 Message control 7 4"),
    (0xFFFFE45C, "HCAN0_MC7_5", 1, "HCAN0 Message control 7 5"),
    (0xFFFFE45D, "HCAN0_MC7_6", 1, "HCAN0 Message control 7 6"),
    (0xFFFFE45E, "HCAN0_MC7_7", 1, "HCAN0 Message control 7 7"),
    (0xFFFFE45F, "HCAN0_MC7_8", 1, "HCAN0 Message control 7 8"),
    (0xFFFFE460, "HCAN0_MC8_1", 1, "HCAN0 Message control 8 1"),
    (0xFFFFE461, "HCAN0_MC8_2", 1, "HCAN0 Message control 8 2"),
    (0xFFFFE462, "HCAN0_MC8_3", 1, "HCAN0 Message control 8 3"),
    (0xFFFFE463, "HCAN0_MC8_4", 1, "HCAN0 Message control 8 4"),
    (0xFFFFE464, "HCAN0_MC8_5", 1, "HCAN0 Message control 8 5"),
    (0xFFFFE465, "HCAN0_MC8_6", 1, "HCAN0 Message control 8 6"),
    (0xFFFFE466, "HCAN0_MC8_7", 1, "HCAN0 Message control 8 7"),
    (0xFFFFE467, "HCAN0_MC8_8", 1, "HCAN0 Message control 8 8"),
    (0xFFFFE468, "HCAN0_MC9_1", 1, "HCAN0 Message control 9 1"),
    (0xFFFFE469, "HCAN0_MC9_2", 1, "HCAN0 Message control 9 2"),
    (0xFFFFE46A, "HCAN0_MC9_3", 1, "HCAN0 Message control 9 3"),
    (0xFFFFE46B, "HCAN0_MC9_4", 1, "HCAN0 Message control 9 4"),
    (0xFFFFE46C, "HCAN0_MC9_5", 1, "HCAN0 Message control 9 5"),
    (0xFFFFE46D, "HCAN0_MC9_6", 1, "HCAN0 Message control 9 6"),
    (0xFFFFE46E, "HCAN0_MC9_7", 1, "HCAN0 Message control 9 7"),
    (0xFFFFE46F, "HCAN0_MC9_8", 1, "HCAN0 Message control 9 8"),
    (0xFFFFE470, "HCAN0_MC10_1", 1, "HCAN0 Message control 10 1"),
    (0xFFFFE471, "HCAN0_MC10_2", 1, "HCAN0 Message control 10 2"),
    (0xFFFFE472, "HCAN0_MC10_3", 1, "HCAN0 Message control 10 3"),
    (0xFFFFE473, "HCAN0_MC10_4", 1, "HCAN0 Message control 10 4"),
    (0xFFFFE474, "HCAN0_MC10_5", 1, "HCAN0 Message control 10 5"),
    (0xFFFFE475, "HCAN0_MC10_6", 1, "HCAN0 Message control 10 6"),
    (0xFFFFE476, "HCAN0_MC10_7", 1, "HCAN0 Message control 10 7"),
    (0xFFFFE477, "HCAN0_MC10_8", 1, "HCAN0 Message control 10 8"),
    (0xFFFFE478, "HCAN0_MC11_1", 1, "HCAN0 Message control 11 1"),
    (0xFFFFE479, "HCAN0_MC11_2", 1, "HCAN0 Message control 11 2"),
    (0xFFFFE47A, "HCAN0_MC11_3", 1, "HCAN0 Message control 11 3"),
    (0xFFFFE47B, "HCAN0_MC11_4", 1, "HCAN0 Message control 11 4"),
    (0xFFFFE47C, "HCAN0_MC11_5", 1, "HCAN0 Message control 11 5"),
    (0xFFFFE47D, "HCAN0_MC11_6", 1, "HCAN0 Message control 11 6"),
    (0xFFFFE47E, "HCAN0_MC11_7", 1, "HCAN0 Message control 11 7"),
    (0xFFFFE47F, "HCAN0_MC11_8", 1, "HCAN0 Message control 11 8"),
    (0xFFFFE480, "HCAN0_MC12_1", 1, "HCAN0 Message control 12 1"),
    (0xFFFFE481, "HCAN0_MC12_2", 1, "HCAN0 Message control 12 2"),
    (0xFFFFE482, "HCAN0_MC12_3", 1, "HCAN0 Message control 12 3"),
    (0xFFFFE483, "HCAN0_MC12_4", 1, "HCAN0 Message control 12 4"),
    (0xFFFFE484, "HCAN0_MC12_5", 1, "HCAN0 Message control 12 5"),
    (0xFFFFE485, "HCAN0_MC12_6", 1, "HCAN0 Message control 12 6"),
    (0xFFFFE486, "HCAN0_MC12_7", 1, "HCAN0 Message control 12 7"),
    (0xFFFFE487, "HCAN0_MC12_8", 1, "HCAN0 Message control 12 8"),
    (0xFFFFE488, "HCAN0_MC13_1", 1, "HCAN0 Message control 13 1"),
    (0xFFFFE489, "HCAN0_MC13_2", 1, "HCAN0 Message control 13 2"),
    (0xFFFFE48A, "HCAN0_MC13_3", 1, "HCAN0 Message control 13 3"),
    (0xFFFFE48B, "HCAN0_MC13_4", 1, "HCAN0 Message control 13 4"),
    (0xFFFFE48C, "HCAN0_MC13_5", 1, "HCAN0 Message control 13 5"),
    (0xFFFFE48D, "HCAN0_MC13_6", 1, "HCAN0 Message control 13 6"),
    (0xFFFFE48E, "HCAN0_MC13_7", 1, "HCAN0 Message control 13 7"),
    (0xFFFFE48F, "HCAN0_MC13_8", 1, "HCAN0 Message control 13 8"),
    (0xFFFFE490, "HCAN0_MC14_1", 1, "HCAN0 Message control 14 1"),
    (0xFFFFE491, "HCAN0_MC14_2", 1, "HCAN0 Message control 14 2"),
    (0xFFFFE492, "HCAN0_MC14_3", 1, "HCAN0 Message control 14 3"),
    (0xFFFFE493, "HCAN0_MC14_4", 1, "HCAN0 Message control 14 4"),
    (0xFFFFE494, "HCAN0_MC14_5", 1, "HCAN0 Message control 14 5"),
    (0xFFFFE495, "HCAN0_MC14_6", 1, "HCAN0 Message control 14 6"),
    (0xFFFFE496, "HCAN0_MC14_7", 1, "HCAN0 Message control 14 7"),
    (0xFFFFE497, "HCAN0_MC14_8", 1, "HCAN0 Message control 14 8"),
    (0xFFFFE498, "HCAN0_MC15_1", 1, "HCAN0 Message control 15 1"),
    (0xFFFFE499, "HCAN0_MC15_2", 1, "HCAN0 Message control 15 2"),
    (0xFFFFE49A, "HCAN0_MC15_3", 1, "HCAN0 Message control 15 3"),
    (0xFFFFE49B, "HCAN0_MC15_4", 1, "HCAN0 Message control 15 4"),
    (0xFFFFE49C, "HCAN0_MC15_5", 1, "HCAN0 Message control 15 5"),
    (0xFFFFE49D, "HCAN0_MC15_6", 1, "HCAN0 Message control 15 6"),
    (0xFFFFE49E, "HCAN0_MC15_7", 1, "HCAN0 Message control 15 7"),
    (0xFFFFE49F, "HCAN0_MC15_8", 1, "HCAN0 Message control 15 8"),
    (0xFFFFE4B0, "HCAN0_MD0_1", 1, "HCAN0 Message data 0 1"),
    (0xFFFFE4B1, "HCAN0_MD0_2", 1, "HCAN0 Message data 0 2"),
    (0xFFFFE4B2, "HCAN0_MD0_3", 1, "HCAN0 Message data 0 3"),
    (0xFFFFE4B3, "HCAN0_MD0_4", 1, "HCAN0 Message data 0 4"),
    (0xFFFFE4B4, "HCAN0_MD0_5", 1, "HCAN0 Message data 0 5"),
    (0xFFFFE4B5, "HCAN0_MD0_6", 1, "HCAN0 Message data 0 6"),
    (0xFFFFE4B6, "HCAN0_MD0_7", 1, "HCAN0 Message data 0 7"),
    (0xFFFFE4B7, "HCAN0_MD0_8", 1, "HCAN0 Message data 0 8"),
    (0xFFFFE4B8, "HCAN0_MD1_1", 1, "HCAN0 Message data 1 1"),
    (0xFFFFE4B9, "HCAN0_MD1_2", 1, "HCAN0 Message data 1 2"),
    (0xFFFFE4BA, "HCAN0_MD1_3", 1, "HCAN0 Message data 1 3"),
    (0xFFFFE4BB, "HCAN0_MD1_4", 1, "HCAN0 Message data 1 4"),
    (0xFFFFE4BC, "HCAN0_MD1_5", 1, "HCAN0 Message data 1 5"),
    (0xFFFFE4BD, "HCAN0_MD1_6", 1, "HCAN0 Message data 1 6"),
    (0xFFFFE4BE, "HCAN0_MD1_7", 1, "HCAN0 Message data 1 7"),
    (0xFFFFE4BF, "HCAN0_MD1_8", 1, "HCAN0 Message data 1 8"),
    (0xFFFFE4C0, "HCAN0_MD2_1", 1, "HCAN0 Message data 2 1"),
    (0xFFFFE4C1, "HCAN0_MD2_2", 1, "HCAN0 Message data 2 2"),
    (0xFFFFE4C2, "HCAN0_MD2_3", 1, "HCAN0 Message data 2 3"),
    (0xFFFFE4C3, "HCAN0_MD2_4", 1, "HCAN0 Message data 2 4"),
    (0xFFFFE4C4, "HCAN0_MD2_5", 1, "HCAN0 Message data 2 5"),
    (0xFFFFE4C5, "HCAN0_MD2_6", 1, "HCAN0 Message data 2 6"),
    (0xFFFFE4C6, "HCAN0_MD2_7", 1, "HCAN0 Message data 2 7"),
    (0xFFFFE4C7, "HCAN0_MD2_8", 1, "HCAN0 Message data 2 8"),
    (0xFFFFE4C8, "HCAN0_MD3_1", 1, "HCAN0 Message data 3 1"),
    (0xFFFFE4C9, "HCAN0_MD3_2", 1, "HCAN0 Message data 3 2"),
    (0xFFFFE4CA, "HCAN0_MD3_3", 1, "HCAN0 Message data 3 3"),
    (0xFFFFE4CB, "HCAN0_MD3_4", 1, "HCAN0 Message data 3 4"),
    (0xFFFFE4CC, "HCAN0_MD3_5", 1, "HCAN0 Message data 3 5"),
    (0xFFFFE4CD, "HCAN0_MD3_6", 1, "HCAN0 Message data 3 6"),
    (0xFFFFE4CE, "HCAN0_MD3_7", 1, "HCAN0 Message data 3 7"),
    (0xFFFFE4CF, "HCAN0_MD3_8", 1, "HCAN0 Message data 3 8"),
    (0xFFFFE4D0, "HCAN0_MD4_1", 1, "HCAN0 Message data 4 1"),
    (0xFFFFE4D1, "HCAN0_MD4_2", 1, "HCAN0 Message data 4 2"),
    (0xFFFFE4D2, "HCAN0_MD4_3", 1, "HCAN0 Message data 4 3"),
    (0xFFFFE4D3, "HCAN0_MD4_4", 1, "HCAN0 Message data 4 4"),
    (0xFFFFE4D4, "HCAN0_MD4_5", 1, "HCAN0 Message data 4 5"),
    (0xFFFFE4D5, "HCAN0_MD4_6", 1, "HCAN0 Message data 4 6"),
    (0xFFFFE4D6, "HCAN0_MD4_7", 1, "HCAN0 Message data 4 7"),
    (0xFFFFE4D7, "HCAN0_MD4_8", 1, "HCAN0 Message data 4 8"),
    (0xFFFFE4D8, "HCAN0_MD5_1", 1, "HCAN0 Message data 5 1"),
    (0xFFFFE4D9, "HCAN0_MD5_2", 1, "HCAN0 Message data 5 2"),
    (0xFFFFE4DA, "HCAN0_MD5_3", 1, "HCAN0 Message data 5 3"),
    (0xFFFFE4DB, "HCAN0_MD5_4", 1, "HCAN0 Message data 5 4"),
    (0xFFFFE4DC, "HCAN0_MD5_5", 1, "HCAN0 Message data 5 5"),
    (0xFFFFE4DD, "HCAN0_MD5_6", 1, "HCAN0 Message data 5 6"),
    (0xFFFFE4DE, "HCAN0_MD5_7", 1, "HCAN0 Message data 5 7"),
    (0xFFFFE4DF, "HCAN0_MD5_8", 1, "HCAN0 Message data 5 8"),
    (0xFFFFE4E0, "HCAN0_MD6_1", 1, "HCAN0 Message data 6 1"),
    (0xFFFFE4E1, "HCAN0_MD6_2", 1, "HCAN0 Message data 6 2"),
    (0xFFFFE4E2, "HCAN0_MD6_3", 1, "HCAN0 Message data 6 3"),
    (0xFFFFE4E3, "HCAN0_MD6_4", 1, "HCAN0 Message data 6 4"),
    (0xFFFFE4E4, "HCAN0_MD6_5", 1, "HCAN0 Message data 6 5"),
    (0xFFFFE4E5, "HCAN0_MD6_6", 1, "HCAN0 Message data 6 6"),
    (0xFFFFE4E6, "HCAN0_MD6_7", 1, "HCAN0 Message data 6 7"),
    (0xFFFFE4E7, "HCAN0_MD6_8", 1, "HCAN0 Message data 6 8"),
    (0xFFFFE4E8, "HCAN0_MD7_1", 1, "HCAN0 Message data 7 1"),
    (0xFFFFE4E9, "HCAN0_MD7_2", 1, "HCAN0 Message data 7 2"),
    (0xFFFFE4EA, "HCAN0_MD7_3", 1, "HCAN0 Message data 7 3"),
    (0xFFFFE4EB, "HCAN0_MD7_4", 1, "HCAN0 Message data 7 4"),
    (0xFFFFE4EC, "HCAN0_MD7_5", 1, "HCAN0 Message data 7 5"),
    (0xFFFFE4ED, "HCAN0_MD7_6", 1, "HCAN0 Message data 7 6"),
    (0xFFFFE4EE, "HCAN0_MD7_7", 1, "HCAN0 Message data 7 7"),
    (0xFFFFE4EF, "HCAN0_MD7_8", 1, "HCAN0 Message data 7 8"),
    (0xFFFFE4F0, "HCAN0_MD8_1", 1, "HCAN0 Message data 8 1"),
    (0xFFFFE4F1, "HCAN0_MD8_2", 1, "HCAN0 Message data 8 2"),
    (0xFFFFE4F2, "HCAN0_MD8_3", 1, "HCAN0 Message data 8 3"),
    (0xFFFFE4F3, "HCAN0_MD8_4", 1, "HCAN0 Message data 8 4"),
    (0xFFFFE4F4, "HCAN0_MD8_5", 1, "HCAN0 Message data 8 5"),
    (0xFFFFE4F5, "HCAN0_MD8_6", 1, "HCAN0 Message data 8 6"),
    (0xFFFFE4F6, "HCAN0_MD8_7", 1, "HCAN0 Message data 8 7"),
    (0xFFFFE4F7, "HCAN0_MD8_8", 1, "HCAN0 Message data 8 8"),
    (0xFFFFE4F8, "HCAN0_MD9_1", 1, "HCAN0 Message data 9 1"),
    (0xFFFFE4F9, "HCAN0_MD9_2", 1, "HCAN0 Message data 9 2"),
    (0xFFFFE4FA, "HCAN0_MD9_3", 1, "HCAN0 Message data 9 3"),
    (0xFFFFE4FB, "HCAN0_MD9_4", 1, "HCAN0 Message data 9 4"),
    (0xFFFFE4FC, "HCAN0_MD9_5", 1, "HCAN0 Message data 9 5"),
    (0xFFFFE4FD, "HCAN0_MD9_6", 1, "HCAN0 Message data 9 6"),
    (0xFFFFE4FE, "HCAN0_MD9_7", 1, "HCAN0 Message data 9 7"),
    (0xFFFFE4FF, "HCAN0_MD9_8", 1, "HCAN0 Message data 9 8"),
    (0xFFFFE500, "HCAN0_MD10_1", 1, "HCAN0 Message data 10 1"),
    (0xFFFFE501, "HCAN0_MD10_2", 1, "HCAN0 Message data 10 2"),
    (0xFFFFE502, "HCAN0_MD10_3", 1, "HCAN0 Message data 10 3"),
    (0xFFFFE503, "HCAN0_MD10_4", 1, "HCAN0 Message data 10 4"),
    (0xFFFFE504, "HCAN0_MD10_5", 1, "HCAN0 Message data 10 5"),
    (0xFFFFE505, "HCAN0_MD10_6", 1, "HCAN0 Message data 10 6"),
    (0xFFFFE506, "HCAN0_MD10_7", 1, "HCAN0 Message data 10 7"),
    (0xFFFFE507, "HCAN0_MD10_8", 1, "HCAN0 Message data 10 8"),
    (0xFFFFE508, "HCAN0_MD11_1", 1, "HCAN0 Message data 11 1"),
    (0xFFFFE509, "HCAN0_MD11_2", 1, "HCAN0 Message data 11 2"),
    (0xFFFFE50A, "HCAN0_MD11_3", 1, "HCAN0 Message data 11 3"),
    (0xFFFFE50B, "HCAN0_MD11_4", 1, "HCAN0 Message data 11 4"),
    (0xFFFFE50C, "HCAN0_MD11_5", 1, "HCAN0 Message data 11 5"),
    (0xFFFFE50D, "HCAN0_MD11_6", 1, "HCAN0 Message data 11 6"),
    (0xFFFFE50E, "HCAN0_MD11_7", 1, "HCAN0 Message data 11 7"),
    (0xFFFFE50F, "HCAN0_MD11_8", 1, "HCAN0 Message data 11 8"),
    (0xFFFFE510, "HCAN0_MD12_1", 1, "HCAN0 Message data 12 1"),
    (0xFFFFE511, "HCAN0_MD12_2", 1, "HCAN0 Message data 12 2"),
    (0xFFFFE512, "HCAN0_MD12_3", 1, "HCAN0 Message data 12 3"),
    (0xFFFFE513, "HCAN0_MD12_4", 1, "HCAN0 Message data 12 4"),
    (0xFFFFE514, "HCAN0_MD12_5", 1, "HCAN0 Message data 12 5"),
    (0xFFFFE515, "HCAN0_MD12_6", 1, "HCAN0 Message data 12 6"),
    (0xFFFFE516, "HCAN0_MD12_7", 1, "HCAN0 Message data 12 7"),
    (0xFFFFE517, "HCAN0_MD12_8", 1, "HCAN0 Message data 12 8"),
    (0xFFFFE518, "HCAN0_MD13_1", 1, "HCAN0 Message data 13 1"),
    (0xFFFFE519, "HCAN0_MD13_2", 1, "HCAN0 Message data 13 2"),
    (0xFFFFE51A, "HCAN0_MD13_3", 1, "HCAN0 Message data 13 3"),
    (0xFFFFE51B, "HCAN0_MD13_4", 1, "HCAN0 Message data 13 4"),
    (0xFFFFE51C, "HCAN0_MD13_5", 1, "HCAN0 Message data 13 5"),
    (0xFFFFE51D, "HCAN0_MD13_6", 1, "HCAN0 Message data 13 6"),
    (0xFFFFE51E, "HCAN0_MD13_7", 1, "HCAN0 Message data 13 7"),
    (0xFFFFE51F, "HCAN0_MD13_8", 1, "HCAN0 Message data 13 8"),
    (0xFFFFE520, "HCAN0_MD14_1", 1, "HCAN0 Message data 14 1"),
    (0xFFFFE521, "HCAN0_MD14_2", 1, "HCAN0 Message data 14 2"),
    (0xFFFFE522, "HCAN0_MD14_3", 1, "HCAN0 Message data 14 3"),
    (0xFFFFE523, "HCAN0_MD14_4", 1, "HCAN0 Message data 14 4"),
    (0xFFFFE524, "HCAN0_MD14_5", 1, "HCAN0 Message data 14 5"),
    (0xFFFFE525, "HCAN0_MD14_6", 1, "HCAN0 Message data 14 6"),
    (0xFFFFE526, "HCAN0_MD14_7", 1, "HCAN0 Message data 14 7"),
    (0xFFFFE527, "HCAN0_MD14_8", 1, "HCAN0 Message data 14 8"),
    (0xFFFFE528, "HCAN0_MD15_1", 1, "HCAN0 Message data 15 1"),
    (0xFFFFE529, "HCAN0_MD15_2", 1, "HCAN0 Message data 15 2"),
    (0xFFFFE52A, "HCAN0_MD15_3", 1, "HCAN0 Message data 15 3"),
    (0xFFFFE52B, "HCAN0_MD15_4", 1, "HCAN0 Message data 15 4"),
    (0xFFFFE52C, "HCAN0_MD15_5", 1, "HCAN0 Message data 15 5"),
    (0xFFFFE52D, "HCAN0_MD15_6", 1, "HCAN0 Message data 15 6"),
    (0xFFFFE52E, "HCAN0_MD15_7", 1, "HCAN0 Message data 15 7"),
    (0xFFFFE52F, "HCAN0_MD15_8", 1, "HCAN0 Message data 15 8"),
    (0xFFFFE600, "HCAN1_MCR", 1, "HCAN1 Master control register"),
    (0xFFFFE601, "HCAN1_GSR", 1, "HCAN1 General status register"),
    (0xFFFFE602, "HCAN1_BCR", 2, "HCAN1 Bit configuration register"),
    (0xFFFFE604, "HCAN1_MBCR", 2, "HCAN1 Mailbox configuration register"),
    (0xFFFFE606, "HCAN1_TXPR", 2, "HCAN1 Transmit wait register"),
    (0xFFFFE608, "HCAN1_TXCR", 2, "HCAN1 Transmit wait cancel register"),
    (0xFFFFE60A, "HCAN1_TXACK", 2, "HCAN1 Transmit acknowledge register"),
    (0xFFFFE60C, "HCAN1_ABACK", 2, "HCAN1 Abort acknowledge register"),
    (0xFFFFE60E, "HCAN1_RXPR", 2, "HCAN1 Receive complete register"),
    (0xFFFFE610, "HCAN1_RFPR", 2, "HCAN1 Remote request register"),
    (0xFFFFE612, "HCAN1_IRR", 2, "HCAN1 Interrupt register"),
    (0xFFFFE614, "HCAN1_MBIMR", 2, "HCAN1 Mailbox interrupt mask register"),
    (0xFFFFE616, "HCAN1_IMR", 2, "HCAN1 Interrupt mask register"),
    (0xFFFFE618, "HCAN1_REC", 1, "HCAN1 Receive error counter"),
    (0xFFFFE619, "HCAN1_TEC", 1, "HCAN1 Transmit error counter"),
    (0xFFFFE61A, "HCAN1_UMSR", 2, "HCAN1 Unread message status register"),
    (0xFFFFE61C, "HCAN1_LAFML", 2, "HCAN1 Local acceptance filter mask L"),
    (0xFFFFE61E, "HCAN1_LAFMH", 2, "HCAN1 Local acceptance filter mask H"),
    (0xFFFFE620, "HCAN1_MC0_1", 1, "HCAN1 Message control 0 1"),
    (0xFFFFE621, "HCAN1_MC0_2", 1, "HCAN1 Message control 0 2"),
    (0xFFFFE622, "HCAN1_MC0_3", 1, "HCAN1 Message control 0 3"),
    (0xFFFFE623, "HCAN1_MC0_4", 1, "HCAN1 Message control 0 4"),
    (0xFFFFE624, "HCAN1_MC0_5", 1, "HCAN1 Message control 0 5"),
    (0xFFFFE625, "HCAN1_MC0_6", 1, "HCAN1 Message control 0 6"),
    (0xFFFFE626, "HCAN1_MC0_7", 1, "HCAN1 Message control 0 7"),
    (0xFFFFE627, "HCAN1_MC0_8", 1, "HCAN1 Message control 0 8"),
    (0xFFFFE628, "HCAN1_MC1_1", 1, "HCAN1 Message control 1 1"),
    (0xFFFFE629, "HCAN1_MC1_2", 1, "HCAN1 Message control 1 2"),
    (0xFFFFE62A, "HCAN1_MC1_3", 1, "HCAN1 Message control 1 3"),
    (0xFFFFE62B, "HCAN1_MC1_4", 1, "HCAN1 Message control 1 4"),
    (0xFFFFE62C, "HCAN1_MC1_5", 1, "HCAN1 Message control 1 5"),
    (0xFFFFE62D, "HCAN1_MC1_6", 1, "HCAN1 Message control 1 6"),
    (0xFFFFE62E, "HCAN1_MC1_7", 1, "HCAN1 Message control 1 7"),
    (0xFFFFE62F, "HCAN1_MC1_8", 1, "HCAN1 Message control 1 8"),
    (0xFFFFE630, "HCAN1_MC2_1", 1, "HCAN1 Message control 2 1"),
    (0xFFFFE631, "HCAN1_MC2_2", 1, "HCAN1 Message control 2 2"),
    (0xFFFFE632, "HCAN1_MC2_3", 1, "HCAN1 Message control 2 3"),
    (0xFFFFE633, "HCAN1_MC2_4", 1, "HCAN1 Message control 2 4"),
    (0xFFFFE634, "HCAN1_MC2_5", 1, "HCAN1 Message control 2 5"),
    (0xFFFFE635, "HCAN1_MC2_6", 1, "HCAN1 Message control 2 6"),
    (0xFFFFE636, "HCAN1_MC2_7", 1, "HCAN1 Message control 2 7"),
    (0xFFFFE637, "HCAN1_MC2_8", 1, "HCAN1 Message control 2 8"),
    (0xFFFFE638, "HCAN1_MC3_1", 1, "HCAN1 Message control 3 1"),
    (0xFFFFE639, "HCAN1_MC3_2", 1, "HCAN1 Message control 3 2"),
    (0xFFFFE63A, "HCAN1_MC3_3", 1, "HCAN1 Message control 3 3"),
    (0xFFFFE63B, "HCAN1_MC3_4", 1, "HCAN1 Message control 3 4"),
    (0xFFFFE63C, "HCAN1_MC3_5", 1, "HCAN1 Message control 3 5"),
    (0xFFFFE63D, "HCAN1_MC3_6", 1, "HCAN1 Message control 3 6"),
    (0xFFFFE63E, "HCAN1_MC3_7", 1, "HCAN1 Message control 3 7"),
    (0xFFFFE63F, "HCAN1_MC3_8", 1, "HCAN1 Message control 3 8"),
    (0xFFFFE640, "HCAN1_MC4_1", 1, "HCAN1 Message control 4 1"),
    (0xFFFFE641, "HCAN1_MC4_2", 1, "HCAN1 Message control 4 2"),
    (0xFFFFE642, "HCAN1_MC4_3", 1, "HCAN1 Message control 4 3"),
    (0xFFFFE643, "HCAN1_MC4_4", 1, "HCAN1 Message control 4 4"),
    (0xFFFFE644, "HCAN1_MC4_5", 1, "HCAN1 Message control 4 5"),
    (0xFFFFE645, "HCAN1_MC4_6", 1, "HCAN1 Message control 4 6"),
    (0xFFFFE646, "HCAN1_MC4_7", 1, "HCAN1 Message control 4 7"),
    (0xFFFFE647, "HCAN1_MC4_8", 1, "HCAN1 Message control 4 8"),
    (0xFFFFE648, "HCAN1_MC5_1", 1, "HCAN1 Message control 5 1"),
    (0xFFFFE649, "HCAN1_MC5_2", 1, "HCAN1 Message control 5 2"),
    (0xFFFFE64A, "HCAN1_MC5_3", 1, "HCAN1 Message control 5 3"),
    (0xFFFFE64B, "HCAN1_MC5_4", 1, "HCAN1 Message control 5 4"),
    (0xFFFFE64C, "HCAN1_MC5_5", 1, "HCAN1 Message control 5 5"),
    (0xFFFFE64D, "HCAN1_MC5_6", 1, "HCAN1 Message control 5 6"),
    (0xFFFFE64E, "HCAN1_MC5_7", 1, "HCAN1 Message control 5 7"),
    (0xFFFFE64F, "HCAN1_MC5_8", 1, "HCAN1 Message control 5 8"),
    (0xFFFFE650, "HCAN1_MC6_1", 1, "HCAN1 Message control 6 1"),
    (0xFFFFE651, "HCAN1_MC6_2", 1, "HCAN1 Message control 6 2"),
    (0xFFFFE652, "HCAN1_MC6_3", 1, "HCAN1 Message control 6 3"),
    (0xFFFFE653, "HCAN1_MC6_4", 1, "HCAN1 Message control 6 4"),
    (0xFFFFE654, "HCAN1_MC6_5", 1, "HCAN1 Message control 6 5"),
    (0xFFFFE655, "HCAN1_MC6_6", 1, "HCAN1 Message control 6 6"),
    (0xFFFFE656, "HCAN1_MC6_7", 1, "HCAN1 Message control 6 7"),
    (0xFFFFE657, "HCAN1_MC6_8", 1, "HCAN1 Message control 6 8"),
    (0xFFFFE658, "HCAN1_MC7_1", 1, "HCAN1 Message control 7 1"),
    (0xFFFFE659, "HCAN1_MC7_2", 1, "HCAN1 Message control 7 2"),
    (0xFFFFE65A, "HCAN1_MC7_3", 1, "HCAN1 Message control 7 3"),
    (0xFFFFE65B, "HCAN1_MC7_4", 1, "HCAN1 Message control 7 4"),
    (0xFFFFE65C, "HCAN1_MC7_5", 1, "HCAN1 Message control 7 5"),
    (0xFFFFE65D, "HCAN1_MC7_6", 1, "HCAN1 Message control 7 6"),
    (0xFFFFE65E, "HCAN1_MC7_7", 1, "HCAN1 Message control 7 7"),
    (0xFFFFE65F, "HCAN1_MC7_8", 1, "HCAN1 Message control 7 8"),
    (0xFFFFE660, "HCAN1_MC8_1", 1, "HCAN1 Message control 8 1"),
    (0xFFFFE661, "HCAN1_MC8_2", 1, "HCAN1 Message control 8 2"),
    (0xFFFFE662, "HCAN1_MC8_3", 1, "HCAN1 Message control 8 3"),
    (0xFFFFE663, "HCAN1_MC8_4", 1, "HCAN1 Message control 8 4"),
    (0xFFFFE664, "HCAN1_MC8_5", 1, "HCAN1 Message control 8 5"),
    (0xFFFFE665, "HCAN1_MC8_6", 1, "HCAN1 Message control 8 6"),
    (0xFFFFE666, "HCAN1_MC8_7", 1, "HCAN1 Message control 8 7"),
    (0xFFFFE667, "HCAN1_MC8_8", 1, "HCAN1 Message control 8 8"),
    (0xFFFFE668, "HCAN1_MC9_1", 1, "HCAN1 Message control 9 1"),
    (0xFFFFE669, "HCAN1_MC9_2", 1, "HCAN1 Message control 9 2"),
    (0xFFFFE66A, "HCAN1_MC9_3", 1, "HCAN1 Message control 9 3"),
    (0xFFFFE66B, "HCAN1_MC9_4", 1, "HCAN1 Message control 9 4"),
    (0xFFFFE66C, "HCAN1_MC9_5", 1, "HCAN1 Message control 9 5"),
    (0xFFFFE66D, "HCAN1_MC9_6", 1, "HCAN1 Message control 9 6"),
    (0xFFFFE66E, "HCAN1_MC9_7", 1, "HCAN1 Message control 9 7"),
    (0xFFFFE66F, "HCAN1_MC9_8", 1, "HCAN1 Message control 9 8"),
    (0xFFFFE670, "HCAN1_MC10_1", 1, "HCAN1 Message control 10 1"),
    (0xFFFFE671, "HCAN1_MC10_2", 1, "HCAN1 Message control 10 2"),
    (0xFFFFE672, "HCAN1_MC10_3", 1, "HCAN1 Message control 10 3"),
    (0xFFFFE673, "HCAN1_MC10_4", 1, "HCAN1 Message control 10 4"),
    (0xFFFFE674, "HCAN1_MC10_5", 1, "HCAN1 Message control 10 5"),
    (0xFFFFE675, "HCAN1_MC10_6", 1, "HCAN1 Message control 10 6"),
    (0xFFFFE676, "HCAN1_MC10_7", 1, "HCAN1 Message control 10 7"),
    (0xFFFFE677, "HCAN1_MC10_8", 1, "HCAN1 Message control 10 8"),
    (0xFFFFE678, "HCAN1_MC11_1", 1, "HCAN1 Message control 11 1"),
    (0xFFFFE679, "HCAN1_MC11_2", 1, "HCAN1 Message control 11 2"),
    (0xFFFFE67A, "HCAN1_MC11_3", 1, "HCAN1 Message control 11 3"),
    (0xFFFFE67B, "HCAN1_MC11_4", 1, "HCAN1 Message control 11 4"),
    (0xFFFFE67C, "HCAN1_MC11_5", 1, "HCAN1 Message control 11 5"),
    (0xFFFFE67D, "HCAN1_MC11_6", 1, "HCAN1 Message control 11 6"),
    (0xFFFFE67E, "HCAN1_MC11_7", 1, "HCAN1 Message control 11 7"),
    (0xFFFFE67F, "HCAN1_MC11_8", 1, "HCAN1 Message control 11 8"),
    (0xFFFFE680, "HCAN1_MC12_1", 1, "HCAN1 Message control 12 1"),
    (0xFFFFE681, "HCAN1_MC12_2", 1, "HCAN1 Message control 12 2"),
    (0xFFFFE682, "HCAN1_MC12_3", 1, "HCAN1 Message control 12 3"),
    (0xFFFFE683, "HCAN1_MC12_4", 1, "HCAN1 Message control 12 4"),
    (0xFFFFE684, "HCAN1_MC12_5", 1, "HCAN1 Message control 12 5"),
    (0xFFFFE685, "HCAN1_MC12_6", 1, "HCAN1 Message control 12 6"),
    (0xFFFFE686, "HCAN1_MC12_7", 1, "HCAN1 Message control 12 7"),
    (0xFFFFE687, "HCAN1_MC12_8", 1, "HCAN1 Message control 12 8"),
    (0xFFFFE688, "HCAN1_MC13_1", 1, "HCAN1 Message control 13 1"),
    (0xFFFFE689, "HCAN1_MC13_2", 1, "HCAN1 Message control 13 2"),
    (0xFFFFE68A, "HCAN1_MC13_3", 1, "HCAN1 Message control 13 3"),
    (0xFFFFE68B, "HCAN1_MC13_4", 1, "HCAN1 Message control 13 4"),
    (0xFFFFE68C, "HCAN1_MC13_5", 1, "HCAN1 Message control 13 5"),
    (0xFFFFE68D, "HCAN1_MC13_6", 1, "HCAN1 Message control 13 6"),
    (0xFFFFE68E, "HCAN1_MC13_7", 1, "HCAN1 Message control 13 7"),
    (0xFFFFE68F, "HCAN1_MC13_8", 1, "HCAN1 Message control 13 8"),
    (0xFFFFE690, "HCAN1_MC14_1", 1, "HCAN1 Message control 14 1"),
    (0xFFFFE691, "HCAN1_MC14_2", 1, "HCAN1 Message control 14 2"),
    (0xFFFFE692, "HCAN1_MC14_3", 1, "HCAN1 Message control 14 3"),
    (0xFFFFE693, "HCAN1_MC14_4", 1, "HCAN1 Message control 14 4"),
    (0xFFFFE694, "HCAN1_MC14_5", 1, "HCAN1 Message control 14 5"),
    (0xFFFFE695, "HCAN1_MC14_6", 1, "HCAN1 Message control 14 6"),
    (0xFFFFE696, "HCAN1_MC14_7", 1, "HCAN1 Message control 14 7"),
    (0xFFFFE697, "HCAN1_MC14_8", 1, "HCAN1 Message control 14 8"),
    (0xFFFFE698, "HCAN1_MC15_1", 1, "HCAN1 Message control 15 1"),
    (0xFFFFE699, "HCAN1_MC15_2", 1, "HCAN1 Message control 15 2"),
    (0xFFFFE69A, "HCAN1_MC15_3", 1, "HCAN1 Message control 15 3"),
    (0xFFFFE69B, "HCAN1_MC15_4", 1, "HCAN1 Message control 15 4"),
    (0xFFFFE69C, "HCAN1_MC15_5", 1, "HCAN1 Message control 15 5"),
    (0xFFFFE69D, "HCAN1_MC15_6", 1, "HCAN1 Message control 15 6"),
    (0xFFFFE69E, "HCAN1_MC15_7", 1, "HCAN1 Message control 15 7"),
    (0xFFFFE69F, "HCAN1_MC15_8", 1, "HCAN1 Message control 15 8"),
    (0xFFFFE6B0, "HCAN1_MD0_1", 1, "HCAN1 Message data 0 1"),
    (0xFFFFE6B1, "HCAN1_MD0_2", 1, "HCAN1 Message data 0 2"),
    (0xFFFFE6B2, "HCAN1_MD0_3", 1, "HCAN1 Message data 0 3"),
    (0xFFFFE6B3, "HCAN1_MD0_4", 1, "HCAN1 Message data 0 4"),
    (0xFFFFE6B4, "HCAN1_MD0_5", 1, "HCAN1 Message data 0 5"),
    (0xFFFFE6B5, "HCAN1_MD0_6", 1, "HCAN1 Message data 0 6"),
    (0xFFFFE6B6, "HCAN1_MD0_7", 1, "HCAN1 Message data 0 7"),
    (0xFFFFE6B7, "HCAN1_MD0_8", 1, "HCAN1 Message data 0 8"),
    (0xFFFFE6B8, "HCAN1_MD1_1", 1, "HCAN1 Message data 1 1"),
    (0xFFFFE6B9, "HCAN1_MD1_2", 1, "HCAN1 Message data 1 2"),
    (0xFFFFE6BA, "HCAN1_MD1_3", 1, "HCAN1 Message data 1 3"),
    (0xFFFFE6BB, "HCAN1_MD1_4", 1, "HCAN1 Message data 1 4"),
    (0xFFFFE6BC, "HCAN1_MD1_5", 1, "HCAN1 Message data 1 5"),
    (0xFFFFE6BD, "HCAN1_MD1_6", 1, "HCAN1 Message data 1 6"),
    (0xFFFFE6BE, "HCAN1_MD1_7", 1, "HCAN1 Message data 1 7"),
    (0xFFFFE6BF, "HCAN1_MD1_8", 1, "HCAN1 Message data 1 8"),
    (0xFFFFE6C0, "HCAN1_MD2_1", 1, "HCAN1 Message data 2 1"),
    (0xFFFFE6C1, "HCAN1_MD2_2", 1, "HCAN1 Message data 2 2"),
    (0xFFFFE6C2, "HCAN1_MD2_3", 1, "HCAN1 Message data 2 3"),
    (0xFFFFE6C3, "HCAN1_MD2_4", 1, "HCAN1 Message data 2 4"),
    (0xFFFFE6C4, "HCAN1_MD2_5", 1, "HCAN1 Message data 2 5"),
    (0xFFFFE6C5, "HCAN1_MD2_6", 1, "HCAN1 Message data 2 6"),
    (0xFFFFE6C6, "HCAN1_MD2_7", 1, "HCAN1 Message data 2 7"),
    (0xFFFFE6C7, "HCAN1_MD2_8", 1, "HCAN1 Message data 2 8"),
    (0xFFFFE6C8, "HCAN1_MD3_1", 1, "HCAN1 Message data 3 1"),
    (0xFFFFE6C9, "HCAN1_MD3_2", 1, "HCAN1 Message data 3 2"),
    (0xFFFFE6CA, "HCAN1_MD3_3", 1, "HCAN1 Message data 3 3"),
    (0xFFFFE6CB, "HCAN1_MD3_4", 1, "HCAN1 Message data 3 4"),
    (0xFFFFE6CC, "HCAN1_MD3_5", 1, "HCAN1 Message data 3 5"),
    (0xFFFFE6CD, "HCAN1_MD3_6", 1, "HCAN1 Message data 3 6"),
    (0xFFFFE6CE, "HCAN1_MD3_7", 1, "HCAN1 Message data 3 7"),
    (0xFFFFE6CF, "HCAN1_MD3_8", 1, "HCAN1 Message data 3 8"),
    (0xFFFFE6D0, "HCAN1_MD4_1", 1, "HCAN1 Message data 4 1"),
    (0xFFFFE6D1, "HCAN1_MD4_2", 1, "HCAN1 Message data 4 2"),
    (0xFFFFE6D2, "HCAN1_MD4_3", 1, "HCAN1 Message data 4 3"),
    (0xFFFFE6D3, "HCAN1_MD4_4", 1, "HCAN1 Message data 4 4"),
    (0xFFFFE6D4, "HCAN1_MD4_5", 1, "HCAN1 Message data 4 5"),
    (0xFFFFE6D5, "HCAN1_MD4_6", 1, "HCAN1 Message data 4 6"),
    (0xFFFFE6D6, "HCAN1_MD4_7", 1, "HCAN1 Message data 4 7"),
    (0xFFFFE6D7, "HCAN1_MD4_8", 1, "HCAN1 Message data 4 8"),
    (0xFFFFE6D8, "HCAN1_MD5_1", 1, "HCAN1 Message data 5 1"),
    (0xFFFFE6D9, "HCAN1_MD5_2", 1, "HCAN1 Message data 5 2"),
    (0xFFFFE6DA, "HCAN1_MD5_3", 1, "HCAN1 Message data 5 3"),
    (0xFFFFE6DB, "HCAN1_MD5_4", 1, "HCAN1 Message data 5 4"),
    (0xFFFFE6DC, "HCAN1_MD5_5", 1, "HCAN1 Message data 5 5"),
    (0xFFFFE6DD, "HCAN1_MD5_6", 1, "HCAN1 Message data 5 6"),
    (0xFFFFE6DE, "HCAN1_MD5_7", 1, "HCAN1 Message data 5 7"),
    (0xFFFFE6DF, "HCAN1_MD5_8", 1, "HCAN1 Message data 5 8"),
    (0xFFFFE6E0, "HCAN1_MD6_1", 1, "HCAN1 Message data 6 1"),
    (0xFFFFE6E1, "HCAN1_MD6_2", 1, "HCAN1 Message data 6 2"),
    (0xFFFFE6E2, "HCAN1_MD6_3", 1, "HCAN1 Message data 6 3"),
    (0xFFFFE6E3, "HCAN1_MD6_4", 1, "HCAN1 Message data 6 4"),
    (0xFFFFE6E4, "HCAN1_MD6_5", 1, "HCAN1 Message data 6 5"),
    (0xFFFFE6E5, "HCAN1_MD6_6", 1, "HCAN1 Message data 6 6"),
    (0xFFFFE6E6, "HCAN1_MD6_7", 1, "HCAN1 Message data 6 7"),
    (0xFFFFE6E7, "HCAN1_MD6_8", 1, "HCAN1 Message data 6 8"),
    (0xFFFFE6E8, "HCAN1_MD7_1", 1, "HCAN1 Message data 7 1"),
    (0xFFFFE6E9, "HCAN1_MD7_2", 1, "HCAN1 Message data 7 2"),
    (0xFFFFE6EA, "HCAN1_MD7_3", 1, "HCAN1 Message data 7 3"),
    (0xFFFFE6EB, "HCAN1_MD7_4", 1, "HCAN1 Message data 7 4"),
    (0xFFFFE6EC, "HCAN1_MD7_5", 1, "HCAN1 Message data 7 5"),
    (0xFFFFE6ED, "HCAN1_MD7_6", 1, "HCAN1 Message data 7 6"),
    (0xFFFFE6EE, "HCAN1_MD7_7", 1, "HCAN1 Message data 7 7"),
    (0xFFFFE6EF, "HCAN1_MD7_8", 1, "HCAN1 Message data 7 8"),
    (0xFFFFE6F0, "HCAN1_MD8_1", 1, "HCAN1 Message data 8 1"),
    (0xFFFFE6F1, "HCAN1_MD8_2", 1, "HCAN1 Message data 8 2"),
    (0xFFFFE6F2, "HCAN1_MD8_3", 1, "HCAN1 Message data 8 3"),
    (0xFFFFE6F3, "HCAN1_MD8_4", 1, "HCAN1 Message data 8 4"),
    (0xFFFFE6F4, "HCAN1_MD8_5", 1, "HCAN1 Message data 8 5"),
    (0xFFFFE6F5, "HCAN1_MD8_6", 1, "HCAN1 Message data 8 6"),
    (0xFFFFE6F6, "HCAN1_MD8_7", 1, "HCAN1 Message data 8 7"),
    (0xFFFFE6F7, "HCAN1_MD8_8", 1, "HCAN1 Message data 8 8"),
    (0xFFFFE6F8, "HCAN1_MD9_1", 1, "HCAN1 Message data 9 1"),
    (0xFFFFE6F9, "HCAN1_MD9_2", 1, "HCAN1 Message data 9 2"),
    (0xFFFFE6FA, "HCAN1_MD9_3", 1, "HCAN1 Message data 9 3"),
    (0xFFFFE6FB, "HCAN1_MD9_4", 1, "HCAN1 Message data 9 4"),
    (0xFFFFE6FC, "HCAN1_MD9_5", 1, "HCAN1 Message data 9 5"),
    (0xFFFFE6FD, "HCAN1_MD9_6", 1, "HCAN1 Message data 9 6"),
    (0xFFFFE6FE, "HCAN1_MD9_7", 1, "HCAN1 Message data 9 7"),
    (0xFFFFE6FF, "HCAN1_MD9_8", 1, "HCAN1 Message data 9 8"),
    (0xFFFFE700, "HCAN1_MD10_1", 1, "HCAN1 Message data 10 1"),
    (0xFFFFE701, "HCAN1_MD10_2", 1, "HCAN1 Message data 10 2"),
    (0xFFFFE702, "HCAN1_MD10_3", 1, "HCAN1 Message data 10 3"),
    (0xFFFFE703, "HCAN1_MD10_4", 1, "HCAN1 Message data 10 4"),
    (0xFFFFE704, "HCAN1_MD10_5", 1, "HCAN1 Message data 10 5"),
    (0xFFFFE705, "HCAN1_MD10_6", 1, "HCAN1 Message data 10 6"),
    (0xFFFFE706, "HCAN1_MD10_7", 1, "HCAN1 Message data 10 7"),
    (0xFFFFE707, "HCAN1_MD10_8", 1, "HCAN1 Message data 10 8"),
    (0xFFFFE708, "HCAN1_MD11_1", 1, "HCAN1 Message data 11 1"),
    (0xFFFFE709, "HCAN1_MD11_2", 1, "HCAN1 Message data 11 2"),
    (0xFFFFE70A, "HCAN1_MD11_3", 1, "HCAN1 Message data 11 3"),
    (0xFFFFE70B, "HCAN1_MD11_4", 1, "HCAN1 Message data 11 4"),
    (0xFFFFE70C, "HCAN1_MD11_5", 1, "HCAN1 Message data 11 5"),
    (0xFFFFE70D, "HCAN1_MD11_6", 1, "HCAN1 Message data 11 6"),
    (0xFFFFE70E, "HCAN1_MD11_7", 1, "HCAN1 Message data 11 7"),
    (0xFFFFE70F, "HCAN1_MD11_8", 1, "HCAN1 Message data 11 8"),
    (0xFFFFE710, "HCAN1_MD12_1", 1, "HCAN1 Message data 12 1"),
    (0xFFFFE711, "HCAN1_MD12_2", 1, "HCAN1 Message data 12 2"),
    (0xFFFFE712, "HCAN1_MD12_3", 1, "HCAN1 Message data 12 3"),
    (0xFFFFE713, "HCAN1_MD12_4", 1, "HCAN1 Message data 12 4"),
    (0xFFFFE714, "HCAN1_MD12_5", 1, "HCAN1 Message data 12 5"),
    (0xFFFFE715, "HCAN1_MD12_6", 1, "HCAN1 Message data 12 6"),
    (0xFFFFE716, "HCAN1_MD12_7", 1, "HCAN1 Message data 12 7"),
    (0xFFFFE717, "HCAN1_MD12_8", 1, "HCAN1 Message data 12 8"),
    (0xFFFFE718, "HCAN1_MD13_1", 1, "HCAN1 Message data 13 1"),
    (0xFFFFE719, "HCAN1_MD13_2", 1, "HCAN1 Message data 13 2"),
    (0xFFFFE71A, "HCAN1_MD13_3", 1, "HCAN1 Message data 13 3"),
    (0xFFFFE71B, "HCAN1_MD13_4", 1, "HCAN1 Message data 13 4"),
    (0xFFFFE71C, "HCAN1_MD13_5", 1, "HCAN1 Message data 13 5"),
    (0xFFFFE71D, "HCAN1_MD13_6", 1, "HCAN1 Message data 13 6"),
    (0xFFFFE71E, "HCAN1_MD13_7", 1, "HCAN1 Message data 13 7"),
    (0xFFFFE71F, "HCAN1_MD13_8", 1, "HCAN1 Message data 13 8"),
    (0xFFFFE720, "HCAN1_MD14_1", 1, "HCAN1 Message data 14 1"),
    (0xFFFFE721, "HCAN1_MD14_2", 1, "HCAN1 Message data 14 2"),
    (0xFFFFE722, "HCAN1_MD14_3", 1, "HCAN1 Message data 14 3"),
    (0xFFFFE723, "HCAN1_MD14_4", 1, "HCAN1 Message data 14 4"),
    (0xFFFFE724, "HCAN1_MD14_5", 1, "HCAN1 Message data 14 5"),
    (0xFFFFE725, "HCAN1_MD14_6", 1, "HCAN1 Message data 14 6"),
    (0xFFFFE726, "HCAN1_MD14_7", 1, "HCAN1 Message data 14 7"),
    (0xFFFFE727, "HCAN1_MD14_8", 1, "HCAN1 Message data 14 8"),
    (0xFFFFE728, "HCAN1_MD15_1", 1, "HCAN1 Message data 15 1"),
    (0xFFFFE729, "HCAN1_MD15_2", 1, "HCAN1 Message data 15 2"),
    (0xFFFFE72A, "HCAN1_MD15_3", 1, "HCAN1 Message data 15 3"),
    (0xFFFFE72B, "HCAN1_MD15_4", 1, "HCAN1 Message data 15 4"),
    (0xFFFFE72C, "HCAN1_MD15_5", 1, "HCAN1 Message data 15 5"),
    (0xFFFFE72D, "HCAN1_MD15_6", 1, "HCAN1 Message data 15 6"),
    (0xFFFFE72E, "HCAN1_MD15_7", 1, "HCAN1 Message data 15 7"),
    (0xFFFFE72F, "HCAN1_MD15_8", 1, "HCAN1 Message data 15 8"),
    (0xFFFFE800, "FCCS", 1, "Flash code control status"),
    (0xFFFFE801, "FPCS", 1, "Flash program code select register"),
    (0xFFFFE802, "FECS", 1, "Flash erase code select register"),
    (0xFFFFE804, "FKEY", 1, "Flash key code register"),
    (0xFFFFE805, "FMATS", 1, "Flash MAT select register"),
    (0xFFFFE806, "FTDAR", 1, "Flash transfer destination address register"),
    (0xFFFFEC00, "UBARH", 2, "User break address register H"),
    (0xFFFFEC02, "UBARL", 2, "User break address register L"),
    (0xFFFFEC04, "UBAMRH", 2, "User break address mask register H"),
    (0xFFFFEC06, "UBAMRL", 2, "User break address mask register L"),
    (0xFFFFEC08, "UBBR", 2, "User break bus cycle register"),
    (0xFFFFEC0A, "UBCR", 2, "User break control register"),
    (0xFFFFEC10, "TCSR", 1, "Timer control/status register"),
    (0xFFFFEC11, "TCNT", 1, "Timer counter"),
    (0xFFFFEC12, "RSTCSR_W", 1, "Reset control/status register (write)"),
    (0xFFFFEC13, "RSTCSR_R", 1, "Reset control/status register (read)"),
    (0xFFFFEC14, "SBYCR", 1, "Standby control register"),
    (0xFFFFEC20, "BCR1", 2, "Bus control register 1"),
    (0xFFFFEC22, "BCR2", 2, "Bus control register 2"),
    (0xFFFFEC24, "WCR", 2, "Wait state control register"),
    (0xFFFFEC26, "RAMER", 2, "RAM emulation register"),
    (0xFFFFECB0, "DMAOR", 2, "Shared DMA operation register"),
    (0xFFFFECC0, "SAR0", 4, "DMA source address register 0"),
    (0xFFFFECC4, "DAR0", 4, "DMA destination address register 0"),
    (0xFFFFECC8, "DMATCR0", 4, "DMA transfer count register 0"),
    (0xFFFFECCC, "CHCR0", 4, "DMA channel control register 0"),
    (0xFFFFECD0, "SAR1", 4, "DMA source address register 1"),
    (0xFFFFECD4, "DAR1", 4, "DMA destination address register 1"),
    (0xFFFFECD8, "DMATCR1", 4, "DMA transfer count register 1"),
    (0xFFFFECDC, "CHCR1", 4, "DMA channel control register 1"),
    (0xFFFFECE0, "SAR2", 4, "DMA source address register 2"),
    (0xFFFFECE4, "DAR2", 4, "DMA destination address register 2"),
    (0xFFFFECE8, "DMATCR2", 4, "DMA transfer count register 2"),
    (0xFFFFECEC, "CHCR2", 4, "DMA channel control register 2"),
    (0xFFFFECF0, "SAR3", 4, "DMA source address register 3"),
    (0xFFFFECF4, "DAR3", 4, "DMA destination address register 3"),
    (0xFFFFECF8, "DMATCR3", 4, "DMA transfer count register 3"),
    (0xFFFFECFC, "CHCR3", 4, "DMA channel control register 3"),
    (0xFFFFED00, "IPRA", 2, "Interrupt priority register A"),
    (0xFFFFED02, "IPRB", 2, "Interrupt priority register B"),
    (0xFFFFED04, "IPRC", 2, "Interrupt priority register C"),
    (0xFFFFED06, "IPRD", 2, "Interrupt priority register D"),
    (0xFFFFED08, "IPRE", 2, "Interrupt priority register E"),
    (0xFFFFED0A, "IPRF", 2, "Interrupt priority register F"),
    (0xFFFFED0C, "IPRG", 2, "Interrupt priority register G"),
    (0xFFFFED0E, "IPRH", 2, "Interrupt priority register H"),
    (0xFFFFED10, "IPRI", 2, "Interrupt priority register I"),
    (0xFFFFED12, "IPRJ", 2, "Interrupt priority register J"),
    (0xFFFFED14, "IPRK", 2, "Interrupt priority register K"),
    (0xFFFFED16, "IPRL", 2, "Interrupt priority register L"),
    (0xFFFFED18, "ICR", 2, "Interrupt control register"),
    (0xFFFFED1A, "ISR", 2, "IRQ status register"),
    (0xFFFFF000, "SMR0", 1, "Serial mode register 0"),
    (0xFFFFF001, "BRR0", 1, "Bit rate register 0"),
    (0xFFFFF002, "SCR0", 1, "Serial control register 0"),
    (0xFFFFF003, "TDR0", 1, "Transmit data register 0"),
    (0xFFFFF004, "SSR0", 1, "Seria status register 0"),
    (0xFFFFF005, "RDR0", 1, "Receive data register 0"),
    (0xFFFFF006, "SDCR0", 1, "Serial direction control register 0"),
    (0xFFFFF008, "SMR1", 1, "Serial mode register 1"),
    (0xFFFFF009, "BRR1", 1, "Bit rate register 1"),
    (0xFFFFF00A, "SCR1", 1, "Serial control register 1"),
    (0xFFFFF00B, "TDR1", 1, "Transmit data register 1"),
    (0xFFFFF00C, "SSR1", 1, "Seria status register 1"),
    (0xFFFFF00D, "RDR1", 1, "Receive data register 1"),
    (0xFFFFF00E, "SDCR1", 1, "Serial direction control register 1"),
    (0xFFFFF010, "SMR2", 1, "Serial mode register 2"),
    (0xFFFFF011, "BRR2", 1, "Bit rate register 2"),
    (0xFFFFF012, "SCR2", 1, "Serial control register 2"),
    (0xFFFFF013, "TDR2", 1, "Transmit data register 2"),
    (0xFFFFF014, "SSR2", 1, "Seria status register 2"),
    (0xFFFFF015, "RDR2", 1, "Receive data register 2"),
    (0xFFFFF016, "SDCR2", 1, "Serial direction control register 2"),
    (0xFFFFF018, "SMR3", 1, "Serial mode register 3"),
    (0xFFFFF019, "BRR3", 1, "Bit rate register 3"),
    (0xFFFFF01A, "SCR3", 1, "Serial control register 3"),
    (0xFFFFF01B, "TDR3", 1, "Transmit data register 3"),
    (0xFFFFF01C, "SSR3", 1, "Seria status register 3"),
    (0xFFFFF01D, "RDR3", 1, "Receive data register 3"),
    (0xFFFFF01E, "SDCR3", 1, "Serial direction control register 3"),
    (0xFFFFF020, "SMR4", 1, "Serial mode register 4"),
    (0xFFFFF021, "BRR4", 1, "Bit rate register 4"),
    (0xFFFFF022, "SCR4", 1, "Serial control register 4"),
    (0xFFFFF023, "TDR4", 1, "Transmit data register 4"),
    (0xFFFFF024, "SSR4", 1, "Seria status register 4"),
    (0xFFFFF025, "RDR4", 1, "Receive data register 4"),
    (0xFFFFF026, "SDCR4", 1, "Serial direction control register 4"),
    (0xFFFFF400, "TSTR2", 1, "Common timer start register 2"),
    (0xFFFFF401, "TSTR1", 1, "Common timer start register 1"),
    (0xFFFFF402, "TSTR3", 1, "Common timer start register 3"),
    (0xFFFFF404, "PSCR1", 1, "Common prescaler register 1"),
    (0xFFFFF406, "PSCR2", 1, "Common prescaler register 2"),
    (0xFFFFF408, "PSCR3", 1, "Common prescaler register 3"),
    (0xFFFFF40A, "PSCR4", 1, "Common prescaler register 4"),
    (0xFFFFF420, "ICR0DH", 2, "Input capture register 0DH"),
    (0xFFFFF422, "ICR0DL", 2, "Input capture register 0DL"),
    (0xFFFFF424, "ITVRR1", 1, "Timer interval interrupt request register 1"),
    (0xFFFFF426, "ITVRR2A", 1, "Timer interval interrupt request register 2A"),
    (0xFFFFF428, "ITVRR2B", 1, "Timer interval interrupt request register 2B"),
    (0xFFFFF42A, "TIOR0", 1, "Timer I/O control register"),
    (0xFFFFF42C, "TSR0", 2, "Timer status register 0"),
    (0xFFFFF42E, "TIER0", 2, "Timer interrupt enable register 0"),
    (0xFFFFF430, "TCNT0H", 2, "Free-running counter 0H"),
    (0xFFFFF432, "TCNT0L", 2, "Free-running counter 0L"),
    (0xFFFFF434, "ICR0AH", 2, "Input capture register 0AH"),
    (0xFFFFF436, "ICR0AL", 2, "Input capture register 0AL"),
    (0xFFFFF438, "ICR0BH", 2, "Input capture register 0BH"),
    (0xFFFFF43A, "ICR0BL", 2, "Input capture register 0BL"),
    (0xFFFFF43C, "ICR0CH", 2, "Input capture register 0CH"),
    (0xFFFFF43E, "ICR0CL", 2, "Input capture register 0CL"),
    (0xFFFFF440, "TCNT1A", 2, "Free-running counter 1A"),
    (0xFFFFF442, "TCNT1B", 2, "Free-running counter 1B"),
    (0xFFFFF444, "GR1A", 2, "General register 1A"),
    (0xFFFFF446, "GR1B", 2, "General register 1B"),
    (0xFFFFF448, "GR1C", 2, "General register 1C"),
    (0xFFFFF44A, "GR1D", 2, "General register 1D"),
    (0xFFFFF44C, "GR1E", 2, "General register 1E"),
    (0xFFFFF44E, "GR1F", 2, "General register 1F"),
    (0xFFFFF450, "GR1G", 2, "General register 1G"),
    (0xFFFFF452, "GR1H", 2, "General register 1H"),
    (0xFFFFF454, "OCR1", 2, "Output compare register 1"),
    (0xFFFFF456, "OSBR1", 2, "Offset base register 1"),
    (0xFFFFF458, "TIOR1B", 1, "Timer I/O control register 1B"),
    (0xFFFFF459, "TIOR1A", 1, "Timer I/O control register 1A"),
    (0xFFFFF45A, "TIOR1D", 1, "Timer I/O control register 1D"),
    (0xFFFFF45B, "TIOR1C", 1, "Timer I/O control register 1C"),
    (0xFFFFF45C, "TCR1B", 1, "Timer control register 1B"),
    (0xFFFFF45D, "TCR1A", 1, "Timer control register 1A"),
    (0xFFFFF45E, "TSR1A", 2, "Timer status register 1A"),
    (0xFFFFF460, "TSR1B", 2, "Timer status register 1B"),
    (0xFFFFF462, "TIER1A", 2, "Timer interrupt enable register 1A"),
    (0xFFFFF464, "TIER1B", 2, "Timer interrupt enable register 1B"),
    (0xFFFFF466, "TRGMDR", 1, "Trigger mode register"),
    (0xFFFFF480, "TSR3", 2, "Timer status register 3"),
    (0xFFFFF482, "TIER3", 2, "Timer interrupt enable register 3"),
    (0xFFFFF484, "TMDR", 1, "Timer mode register"),
    (0xFFFFF4A0, "TCNT3", 2, "Free-running conuter 3"),
    (0xFFFFF4A2, "GR3A", 2, "General register 3A"),
    (0xFFFFF4A4, "GR3B", 2, "General register 3B"),
    (0xFFFFF4A6, "GR3C", 2, "General register 3C"),
    (0xFFFFF4A8, "GR3D", 2, "General register 3D"),
    (0xFFFFF4AA, "TIOR3B", 1, "Timer I/O control register 3B"),
    (0xFFFFF4AB, "TIOR3A", 1, "Timer I/O control register 3A"),
    (0xFFFFF4AC, "TCR3", 1, "Timer control register 3"),
    (0xFFFFF4C0, "TCNT4", 2, "Free-running counter 4"),
    (0xFFFFF4C2, "GR4A", 2, "General register 4A"),
    (0xFFFFF4C4, "GR4B", 2, "General register 4B"),
    (0xFFFFF4C6, "GR4C", 2, "General register 4C"),
    (0xFFFFF4C8, "GR4D", 2, "General register 4D"),
    (0xFFFFF4CA, "TIOR4B", 1, "Timer I/O control register 4B"),
    (0xFFFFF4CB, "TIOR4A", 1, "Timer I/O control register 4A"),
    (0xFFFFF4CC, "TCR4", 1, "Timer control register 4"),
    (0xFFFFF4E0, "TCNT5", 2, "Free-running counter 5"),
    (0xFFFFF4E2, "GR5A", 2, "General register 5A"),
    (0xFFFFF4E4, "GR5B", 2, "General register 5B"),
    (0xFFFFF4E6, "GR5C", 2, "General register 5C"),
    (0xFFFFF4E8, "GR5D", 2, "General register 5D"),
    (0xFFFFF4EA, "TIOR5B", 1, "Timer I/O control register 5B"),
    (0xFFFFF4EB, "TIOR5A", 1, "Timer I/O control register 5A"),
    (0xFFFFF4EC, "TCR5", 1, "Timer control register 5"),
    (0xFFFFF500, "TCNT6A", 2, "Free-running counter 6A"),
    (0xFFFFF502, "TCNT6B", 2, "Free-running counter 6B"),
    (0xFFFFF504, "TCNT6C", 2, "Free-running counter 6C"),
    (0xFFFFF506, "TCNT6D", 2, "Free-running counter 6D"),
    (0xFFFFF508, "CYLR6A", 2, "Cycle register 6A"),
    (0xFFFFF50A, "CYLR6B", 2, "Cycle register 6B"),
    (0xFFFFF50C, "CYLR6C", 2, "Cycle register 6C"),
    (0xFFFFF50E, "CYLR6D", 2, "Cycle register 6D"),
    (0xFFFFF510, "BFR6A", 2, "Buffer register 6A"),
    (0xFFFFF512, "BFR6B", 2, "Buffer register 6B"),
    (0xFFFFF514, "BFR6C", 2, "Buffer register 6C"),
    (0xFFFFF516, "BFR6D", 2, "Buffer register 6D"),
    (0xFFFFF518, "DTR6A", 2, "Duty register 6A"),
    (0xFFFFF51A, "DTR6B", 2, "Duty register 6B"),
    (0xFFFFF51C, "DTR6C", 2, "Duty register 6C"),
    (0xFFFFF51E, "DTR6D", 2, "Duty register 6D"),
    (0xFFFFF520, "TCR6B", 1, "Timer control register 6A"),
    (0xFFFFF521, "TCR6A", 1, "Timer control register 6B"),
    (0xFFFFF522, "TSR6", 2, "Timer status register 6"),
    (0xFFFFF524, "TIER6", 2, "Timer interrupt enable register 6"),
    (0xFFFFF526, "PMDR", 1, "PWM mode register"),
    (0xFFFFF580, "TCNT7A", 2, "Free-running counter 7A"),
    (0xFFFFF582, "TCNT7B", 2, "Free-running counter 7B"),
    (0xFFFFF584, "TCNT7C", 2, "Free-running counter 7C"),
    (0xFFFFF586, "TCNT7D", 2, "Free-running counter 7D"),
    (0xFFFFF588, "CYLR7A", 2, "Cycle register 7A"),
    (0xFFFFF58A, "CYLR7B", 2, "Cycle register 7B"),
    (0xFFFFF58C, "CYLR7C", 2, "Cycle register 7C"),
    (0xFFFFF58E, "CYLR7D", 2, "Cycle register 7D"),
    (0xFFFFF590, "BFR7A", 2, "Buffer register 7A"),
    (0xFFFFF592, "BFR7B", 2, "Buffer register 7B"),
    (0xFFFFF594, "BFR7C", 2, "Buffer register 7C"),
    (0xFFFFF596, "BFR7D", 2, "Buffer register 7D"),
    (0xFFFFF598, "DTR7A", 2, "Duty register 7A"),
    (0xFFFFF59A, "DTR7B", 2, "Duty register 7B"),
    (0xFFFFF59C, "DTR7C", 2, "Duty register 7C"),
    (0xFFFFF59E, "DTR7D", 2, "Duty register 7D"),
    (0xFFFFF5A0, "TCR7B", 1, "Timer control register 7B"),
    (0xFFFFF5A1, "TCR7A", 1, "Timer control register 7A"),
    (0xFFFFF5A2, "TSR7", 2, "Timer status register 7"),
    (0xFFFFF5A4, "TIER7", 2, "Timer interrupt enable register 7"),
    (0xFFFFF5C0, "TCNT11", 2, "Free-running counter 11"),
    (0xFFFFF5C2, "GR11A", 2, "General register 11A"),
    (0xFFFFF5C4, "GR11B", 2, "General register 11B"),
    (0xFFFFF5C6, "TIOR11", 1, "Timer I/O control register 11"),
    (0xFFFFF5C8, "TCR11", 1, "Timer control register 11"),
    (0xFFFFF5CA, "TSR11", 2, "Timer status register 11"),
    (0xFFFFF5CC, "TIER11", 2, "Timer interrupt enable register 11"),
    (0xFFFFF600, "TCNT2A", 2, "Free-running counter 2A"),
    (0xFFFFF602, "TCNT2B", 2, "Free-running counter 2B"),
    (0xFFFFF604, "GR2A", 2, "General register 2A"),
    (0xFFFFF606, "GR2B", 2, "General register 2B"),
    (0xFFFFF608, "GR2C", 2, "General register 2C"),
    (0xFFFFF60A, "GR2D", 2, "General register 2D"),
    (0xFFFFF60C, "GR2E", 2, "General register 2E"),
    (0xFFFFF60E, "GR2F", 2, "General register 2F"),
    (0xFFFFF610, "GR2G", 2, "General register 2G"),
    (0xFFFFF612, "GR2H", 2, "General register 2H"),
    (0xFFFFF614, "OCR2A", 2, "Output compare register 2A"),
    (0xFFFFF616, "OCR2B", 2, "Output compare register 2B"),
    (0xFFFFF618, "OCR2C", 2, "Output compare register 2C"),
    (0xFFFFF61A, "OCR2D", 2, "Output compare register 2D"),
    (0xFFFFF61C, "OCR2E", 2, "Output compare register 2E"),
    (0xFFFFF61E, "OCR2F", 2, "Output compare register 2F"),
    (0xFFFFF620, "OCR2G", 2, "Output compare register 2G"),
    (0xFFFFF622, "OCR2H", 2, "Output compare register 2H"),
    (0xFFFFF624, "OSBR2", 2, "Offset base register 2"),
    (0xFFFFF626, "TIOR2B", 1, "Timer I/O control register 2B"),
    (0xFFFFF627, "TIOR2A", 1, "Timer I/O control register 2A"),
    (0xFFFFF628, "TIOR2D", 1, "Timer I/O control register 2D"),
    (0xFFFFF629, "TIOR2C", 1, "Timer I/O control register 2C"),
    (0xFFFFF62A, "TCR2B", 1, "Timer control register 2B"),
    (0xFFFFF62B, "TCR2A", 1, "Timer control register 2A"),
    (0xFFFFF62C, "TSR2A", 2, "Timer status register 2A"),
    (0xFFFFF62E, "TSR2B", 2, "Timer status register 2B"),
    (0xFFFFF630, "TIER2A", 2, "Timer interrupt enable register 2A"),
    (0xFFFFF632, "TIER2B", 2, "Timer interrupt enable register 2B"),
    (0xFFFFF640, "DCNT8A", 2, "Down-counter 8A"),
    (0xFFFFF642, "DNCT8B", 2, "Down-counter 8B"),
    (0xFFFFF644, "DNCT8C", 2, "Down-counter 8C"),
    (0xFFFFF646, "DCNT8D", 2, "Down-counter 8D"),
    (0xFFFFF648, "DCNT8E", 2, "Down-counter 8E"),
    (0xFFFFF64A, "DCNT8F", 2, "Down-counter 8F"),
    (0xFFFFF64C, "DCNT8G", 2, "Down-counter 8G"),
    (0xFFFFF64E, "DCNT8H", 2, "Down-counter 8H"),
    (0xFFFFF650, "DCNT8I", 2, "Down-counter 8I"),
    (0xFFFFF652, "DCNT8J", 2, "Down-counter 8J"),
    (0xFFFFF654, "DCNT8K", 2, "Down-counter 8K"),
    (0xFFFFF656, "DCNT8L", 2, "Down-counter 8L"),
    (0xFFFFF658, "DCNT8M", 2, "Down-counter 8M"),
    (0xFFFFF65A, "DCNT8N", 2, "Down-counter 8N"),
    (0xFFFFF65C, "DCNT8O", 2, "Down-counter 8O"),
    (0xFFFFF65E, "DCNT8P", 2, "Down-counter 8P"),
    (0xFFFFF660, "RLDR8", 2, "Reload register 8"),
    (0xFFFFF662, "TCNR", 2, "Timer connection register"),
    (0xFFFFF664, "OTR", 2, "One-shot pulse terminate register"),
    (0xFFFFF666, "DSTR", 2, "Down-count start register"),
    (0xFFFFF668, "TCR8", 1, "Timer control register 8"),
    (0xFFFFF66A, "TSR8", 2, "Timer status register 8"),
    (0xFFFFF66C, "TIER8", 2, "Timer interrupt enable register 8"),
    (0xFFFFF66E, "RLDENR", 1, "Reload enable register"),
    (0xFFFFF680, "ECNT9A", 1, "Event counter 9A"),
    (0xFFFFF682, "ECNT9B", 1, "Event counter 9B"),
    (0xFFFFF684, "ECNT9C", 1, "Event counter 9C"),
    (0xFFFFF686, "ECNT9D", 1, "Event counter 9D"),
    (0xFFFFF688, "ECNT9E", 1, "Event counter 9E"),
    (0xFFFFF68A, "ECNT9F", 1, "Event counter 9F"),
    (0xFFFFF68C, "GR9A", 1, "General register 9A"),
    (0xFFFFF68E, "GR9B", 1, "General register 9B"),
    (0xFFFFF690, "GR9C", 1, "General register 9C"),
    (0xFFFFF692, "GR9D", 1, "General register 9D"),
    (0xFFFFF694, "GR9E", 1, "General register 9E"),
    (0xFFFFF696, "GR9F", 1, "General register 9F"),
    (0xFFFFF698, "TCR9A", 1, "Timer control register 9A"),
    (0xFFFFF69A, "TCR9B", 1, "Timer control register 9B"),
    (0xFFFFF69C, "TCR9C", 1, "Timer control register 9C"),
    (0xFFFFF69E, "TSR9", 2, "Timer status register 9"),
    (0xFFFFF6A0, "TIER9", 2, "Timer interrupt enable register 9"),
    (0xFFFFF6C0, "TCNT10AH", 2, "Free-running counter 10AH"),
    (0xFFFFF6C2, "TCNT10AL", 2, "Free-running conuter 10AL"),
    (0xFFFFF6C4, "TCNT10B", 2, "Event counter 10B"),
    (0xFFFFF6C6, "TCNT10C", 2, "Reload counter 10C"),
    (0xFFFFF6C8, "TCNT10D", 1, "Correction counter 10D"),
    (0xFFFFF6CA, "TCNT10E", 2, "Correction angle counter 10E"),
    (0xFFFFF6CC, "TCNT10F", 2, "Correction angle counter 10F"),
    (0xFFFFF6CE, "TCNT10G", 2, "Free-running counter 10G"),
    (0xFFFFF6D0, "ICR10AH", 2, "Input capture register 10AH"),
    (0xFFFFF6D2, "ICR10AL", 2, "Input capture register 10AL"),
    (0xFFFFF6D4, "OCR10AH", 2, "Output compare register 10AH"),
    (0xFFFFF6D6, "OCR10AL", 2, "Output compare register 10AL"),
    (0xFFFFF6D8, "OCR10B", 1, "Output compare register 10B"),
    (0xFFFFF6DA, "RLD10C", 2, "Reload register 10C"),
    (0xFFFFF6DC, "GR10G", 2, "General register 10G"),
    (0xFFFFF6DE, "TCNT10H", 1, "Noise canceler counter 10H"),
    (0xFFFFF6E0, "NCR10", 1, "Noise canceler register 10"),
    (0xFFFFF6E2, "TIOR10", 1, "Timer I/O counter register 10"),
    (0xFFFFF6E4, "TCR10", 1, "Timer control register 10"),
    (0xFFFFF6E6, "TCCLR10", 2, "Correction counter clear register 10"),
    (0xFFFFF6E8, "TSR10", 2, "Timer status register 10"),
    (0xFFFFF6EA, "TIER10", 2, "Timer interrupt enable register 10"),
    (0xFFFFF700, "POPCR", 2, "Pulse output port control register"),
    (0xFFFFF708, "SYSCR", 1, "System control register"),
    (0xFFFFF70A, "MSTCR_W", 1, "Module standby control register (write)"),
    (0xFFFFF70B, "MSTCR_R", 1, "Module standby control register (read)"),
    (0xFFFFF710, "CMSTR", 2, "Shared compare match timer start register"),
    (0xFFFFF712, "CMCSR0", 2, "Compare match timer control/status register 0"),
    (0xFFFFF714, "CMCNT0", 2, "Compare match timer counter 0"),
    (0xFFFFF716, "CMCOR0", 2, "Compare match timer constant register 0"),
    (0xFFFFF718, "CMCSR1", 2, "Compare match timer control/status register 1"),
    (0xFFFFF71A, "CMCNT1", 2, "Compare match timer counter 1"),
    (0xFFFFF71C, "CMCOR1", 2, "Compare match timer constant register 1"),
    (0xFFFFF720, "PAIOR", 2, "Port A IO register"),
    (0xFFFFF722, "PACRH", 2, "Port A control register H"),
    (0xFFFFF724, "PACRL", 2, "Port A control register L"),
    (0xFFFFF726, "PADR", 2, "Port A data register"),
    (0xFFFFF728, "PHIOR", 2, "Port H IO register"),
    (0xFFFFF72A, "PHCR", 2, "Port H control register"),
    (0xFFFFF72C, "PHDR", 2, "Port H data register"),
    (0xFFFFF72E, "ADTRGR1", 1, "A/D trigger register 1"),
    (0xFFFFF730, "PBIOR", 1, "Port B IO register"),
    (0xFFFFF732, "PBCRH", 2, "Port B control register H"),
    (0xFFFFF734, "PBCRL", 2, "Port B control register L"),
    (0xFFFFF736, "PBIR", 2, "Port B invert register"),
    (0xFFFFF738, "PBDR", 2, "Port B data register"),
    (0xFFFFF73A, "PCIOR", 2, "Port C IO register"),
    (0xFFFFF73C, "PCCR", 2, "Port C control register"),
    (0xFFFFF73E, "PCDR", 2, "Port C data register"),
    (0xFFFFF740, "PDIOR", 2, "Port D IO register"),
    (0xFFFFF742, "PDCRH", 2, "Port D control register H"),
    (0xFFFFF744, "PDCRL", 2, "Port D control register L"),
    (0xFFFFF746, "PDDR", 2, "Port D data register"),
    (0xFFFFF748, "PFIOR", 2, "Port F IO register"),
    (0xFFFFF74A, "PFCRH", 2, "Port F control register H"),
    (0xFFFFF74C, "PFCRL", 2, "Port F control register L"),
    (0xFFFFF74E, "PFDR", 2, "Port F data register"),
    (0xFFFFF750, "PEIOR", 2, "Port E IO register"),
    (0xFFFFF752, "PECR", 2, "Port E control register"),
    (0xFFFFF754, "PEDR", 2, "Port E data register"),
    (0xFFFFF760, "PGIOR", 2, "Port G IO register"),
    (0xFFFFF762, "PGCR", 2, "Port G control register"),
    (0xFFFFF764, "PGDR", 2, "Port G data register"),
    (0xFFFFF766, "PJIOR", 2, "Port J IO register"),
    (0xFFFFF768, "PJCRH", 2, "Port J control register H"),
    (0xFFFFF76A, "PJCRL", 2, "Port J control register L"),
    (0xFFFFF76C, "PJDR", 2, "Port J data register"),
    (0xFFFFF76E, "ADTRGR0", 1, "A/D trigger register 0"),
    (0xFFFFF770, "PKIOR", 2, "Port K IO register"),
    (0xFFFFF772, "PKCRH", 2, "Port K control register H"),
    (0xFFFFF774, "PKCRL", 2, "Port K control register L"),
    (0xFFFFF776, "PKIR", 2, "Port K invert register"),
    (0xFFFFF778, "PKDR", 2, "Port K data register"),
    (0xFFFFF780, "PAPR", 2, "Port A port register"),
    (0xFFFFF782, "PBPR", 2, "Port B port register"),
    (0xFFFFF784, "PDPR", 2, "Port D port register"),
    (0xFFFFF786, "PJPR", 2, "Port J port register"),
    (0xFFFFF788, "PLPR", 2, "Port L port register"),
    (0xFFFFF7C2, "SDSR", 2, "High-performance user debug interface status register"),
    (0xFFFFF7C4, "SDDRH", 2, "High-performance user debug interface data register H"),
    (0xFFFFF7C6, "SDDRL", 2, "High-performance user debug interface data register L"),
    (0xFFFFF800, "ADDR0H", 1, "A/D data register 0H"),
    (0xFFFFF801, "ADDR0L", 1, "A/D data register 0L"),
    (0xFFFFF802, "ADDR1H", 1, "A/D data register 1H"),
    (0xFFFFF803, "ADDR1L", 1, "A/D data register 1L"),
    (0xFFFFF804, "ADDR2H", 1, "A/D data register 2H"),
    (0xFFFFF805, "ADDR2L", 1, "A/D data register 2L"),
    (0xFFFFF806, "ADDR3H", 1, "A/D data register 3H"),
    (0xFFFFF807, "ADDR3L", 1, "A/D data register 3L"),
    (0xFFFFF808, "ADDR4H", 1, "A/D data register 4H"),
    (0xFFFFF809, "ADDR4L", 1, "A/D data register 4L"),
    (0xFFFFF80A, "ADDR5H", 1, "A/D data register 5H"),
    (0xFFFFF80B, "ADDR5L", 1, "A/D data register 5L"),
    (0xFFFFF80C, "ADDR6H", 1, "A/D data register 6H"),
    (0xFFFFF80D, "ADDR6L", 1, "A/D data register 6L"),
    (0xFFFFF80E, "ADDR7H", 1, "A/D data register 7H"),
    (0xFFFFF80F, "ADDR7L", 1, "A/D data register 7L"),
    (0xFFFFF810, "ADDR8H", 1, "A/D data register 8H"),
    (0xFFFFF811, "ADDR8L", 1, "A/D data register 8L"),
    (0xFFFFF812, "ADDR9H", 1, "A/D data register 9H"),
    (0xFFFFF813, "ADDR9L", 1, "A/D data register 9L"),
    (0xFFFFF814, "ADDR10H", 1, "A/D data register 10H"),
    (0xFFFFF815, "ADDR10L", 1, "A/D data register 10L"),
    (0xFFFFF816, "ADDR11H", 1, "A/D data register 11H"),
    (0xFFFFF817, "ADDR11L", 1, "A/D data register 11L"),
    (0xFFFFF818, "ADCSR0", 1, "A/D control/status register 0"),
    (0xFFFFF819, "ADCR0", 1, "A/D control register 0"),
    (0xFFFFF820, "ADDR12H", 1, "A/D data register 12H"),
    (0xFFFFF821, "ADDR12L", 1, "A/D data register 12L"),
    (0xFFFFF822, "ADDR13H", 1, "A/D data register 13H"),
    (0xFFFFF823, "ADDR13L", 1, "A/D data register 13L"),
    (0xFFFFF824, "ADDR14H", 1, "A/D data register 14H"),
    (0xFFFFF825, "ADDR14L", 1, "A/D data register 14L"),
    (0xFFFFF826, "ADDR15H", 1, "A/D data register 15H"),
    (0xFFFFF827, "ADDR15L", 1, "A/D data register 15L"),
    (0xFFFFF838, "ADCSR1", 1, "A/D control/status register 1"),
    (0xFFFFF839, "ADCR1", 1, "A/D control register 1"),
    (0xFFFFF858, "ADCSR2", 1, "A/D control/status register 2"),
    (0xFFFFF859, "ADCR2", 1, "A/D control register 2"),
];
